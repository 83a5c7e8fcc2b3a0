//! Field assignment on a record, optionally saved back to its document.

use rfid_model::{AnyRecord, codec};

use crate::cli::SetArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

/// Split a `FIELD=VALUE` argument. The value may itself contain `=`.
fn parse_assignment(raw: &str) -> Result<(&str, &str), CliError> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => Ok((field.trim(), value)),
        _ => Err(CliError::Validation {
            field: "assignment".into(),
            reason: format!("expected FIELD=VALUE, got '{raw}'"),
        }),
    }
}

/// Position of the record to modify.
fn target_index(index: Option<usize>, count: usize) -> Result<usize, CliError> {
    match (index, count) {
        (Some(i), n) => util::check_index(i, n),
        (None, 0 | 1) => Ok(0),
        (None, n) => Err(CliError::AmbiguousRecord { count: n }),
    }
}

pub fn handle(args: &SetArgs, settings: &Settings) -> Result<(), CliError> {
    let kind = util::resolve_kind(&args.kind)?;

    // Validate every assignment before touching any file
    let assignments = args
        .assignments
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let source = match &args.file {
        Some(path) => {
            let format = util::document_format(path, args.format)?;
            Some((path, format, util::read_records(kind, path, format)?))
        }
        None => None,
    };

    // A missing or empty document starts from one fresh record
    let (mut records, index) = match &source {
        Some((_, _, records)) if !records.is_empty() => {
            (records.clone(), target_index(args.index, records.len())?)
        }
        _ => (
            vec![AnyRecord::default_for(kind)],
            target_index(args.index, 1)?,
        ),
    };

    let record = &mut records[index];
    for (field, value) in assignments {
        record.assign(field, value)?;
        tracing::debug!(%kind, field, "assigned field");
    }

    match source {
        Some((path, format, _)) if args.write => {
            let text = codec::encode(format, &records)?;
            std::fs::write(path, text)?;
            tracing::info!(path = %path.display(), count = records.len(), "wrote document");
            if !settings.quiet {
                eprintln!("Updated record #{index} in {}", path.display());
            }
        }
        _ => {
            let out = output::render_records(settings, std::slice::from_ref(&records[index]))?;
            output::print_output(&out, settings.quiet);
        }
    }
    Ok(())
}
