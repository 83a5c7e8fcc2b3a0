//! Shared helpers for command handlers.

use std::path::Path;

use rfid_model::{AnyRecord, DocumentFormat, RecordKind, codec};

use crate::cli::DocFormat;
use crate::error::CliError;

/// Resolve a kind argument, pointing at `rfidctl kinds` when unknown.
pub fn resolve_kind(name: &str) -> Result<RecordKind, CliError> {
    Ok(RecordKind::lookup(name)?)
}

/// Pick the document syntax: `--format` wins, then the file extension.
pub fn document_format(path: &Path, flag: Option<DocFormat>) -> Result<DocumentFormat, CliError> {
    match flag {
        Some(DocFormat::Json) => Ok(DocumentFormat::Json),
        Some(DocFormat::Yaml) => Ok(DocumentFormat::Yaml),
        Some(DocFormat::Toml) => Ok(DocumentFormat::Toml),
        None => DocumentFormat::from_path(path).ok_or_else(|| CliError::UnknownFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Read and decode every record of `kind` in a document.
pub fn read_records(
    kind: RecordKind,
    path: &Path,
    format: DocumentFormat,
) -> Result<Vec<AnyRecord>, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    Ok(codec::decode(kind, format, &text)?)
}

/// Check a 0-based record position against the document size.
pub fn check_index(index: usize, count: usize) -> Result<usize, CliError> {
    if index < count {
        Ok(index)
    } else {
        Err(CliError::IndexOutOfRange { index, count })
    }
}
