//! Record documents in JSON, YAML and TOML.
//!
//! A document holds one record as a bare object, several as an array, or
//! several under a top-level `records` key. The last shape is the only one
//! TOML can express (`[[records]]`), so encoding several records to TOML
//! uses it; JSON and YAML use a plain array.
//!
//! Records are marshaled under the vendor's wire names. Unset fields are
//! omitted on encode and read as unset on decode. Hand-written documents
//! may give text fields bare numbers or booleans (`port = 8080`,
//! `wlanLevel: -40`); those are read as their textual form.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

use crate::error::ModelError;
use crate::field::{FieldSpec, FieldType};
use crate::kind::{AnyRecord, RecordKind};
use crate::record::Record;

const RECORDS_KEY: &str = "records";

/// Document syntax.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

// ── Decoding ────────────────────────────────────────────────────────

/// Parse a document into its raw record objects.
fn parse_items(format: DocumentFormat, text: &str) -> Result<Vec<Value>, ModelError> {
    let decode_err = |message: String| ModelError::Decode { format, message };

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let root: Value = match format {
        DocumentFormat::Json => serde_json::from_str(text).map_err(|e| decode_err(e.to_string()))?,
        DocumentFormat::Yaml => serde_yaml::from_str(text).map_err(|e| decode_err(e.to_string()))?,
        DocumentFormat::Toml => toml::from_str(text).map_err(|e| decode_err(e.to_string()))?,
    };

    match root {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items),
        Value::Object(mut map) if map.len() == 1 && map.contains_key(RECORDS_KEY) => {
            match map.remove(RECORDS_KEY) {
                Some(Value::Array(items)) => Ok(items),
                _ => Err(decode_err(format!("'{RECORDS_KEY}' must be an array"))),
            }
        }
        Value::Object(map) => Ok(vec![Value::Object(map)]),
        other => Err(decode_err(format!(
            "expected a record object or an array of records, found {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Rewrite bare numbers and booleans under text fields as strings.
fn stringify_text_fields(fields: &[FieldSpec], item: &mut Value) {
    let Value::Object(map) = item else {
        return;
    };
    for spec in fields.iter().filter(|f| f.field_type == FieldType::Text) {
        let Some(slot) = map.get_mut(spec.wire) else {
            continue;
        };
        let text = match &*slot {
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        *slot = Value::String(text);
    }
}

/// Decode every record of `kind` held by a document.
pub fn decode(
    kind: RecordKind,
    format: DocumentFormat,
    text: &str,
) -> Result<Vec<AnyRecord>, ModelError> {
    let items = parse_items(format, text)?;
    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, mut item)| {
            stringify_text_fields(kind.fields(), &mut item);
            AnyRecord::from_value(kind, item).map_err(|e| ModelError::InvalidRecord {
                kind,
                index,
                message: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(%kind, %format, count = records.len(), "decoded record document");
    Ok(records)
}

/// Typed variant of [`decode`].
pub fn decode_as<R: Record>(format: DocumentFormat, text: &str) -> Result<Vec<R>, ModelError> {
    parse_items(format, text)?
        .into_iter()
        .enumerate()
        .map(|(index, mut item)| {
            stringify_text_fields(R::fields(), &mut item);
            serde_json::from_value(item).map_err(|e| ModelError::InvalidRecord {
                kind: R::KIND,
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

// ── Encoding ────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Wrapped<'a, T> {
    records: &'a [T],
}

/// Encode records into a document. One record becomes a bare object.
pub fn encode<T: Serialize>(format: DocumentFormat, records: &[T]) -> Result<String, ModelError> {
    let encode_err = |message: String| ModelError::Encode { format, message };

    let text = match (format, records) {
        (DocumentFormat::Json, [single]) => {
            serde_json::to_string_pretty(single).map_err(|e| e.to_string())
        }
        (DocumentFormat::Json, many) => serde_json::to_string_pretty(many).map_err(|e| e.to_string()),
        (DocumentFormat::Yaml, [single]) => serde_yaml::to_string(single).map_err(|e| e.to_string()),
        (DocumentFormat::Yaml, many) => serde_yaml::to_string(many).map_err(|e| e.to_string()),
        // An all-unset record renders as empty TOML, which reads back as
        // zero records; such a record is kept as a one-entry `[[records]]`.
        (DocumentFormat::Toml, [single]) => toml::to_string_pretty(single)
            .and_then(|text| {
                if text.trim().is_empty() {
                    toml::to_string_pretty(&Wrapped { records })
                } else {
                    Ok(text)
                }
            })
            .map_err(|e| e.to_string()),
        (DocumentFormat::Toml, many) => {
            toml::to_string_pretty(&Wrapped { records: many }).map_err(|e| e.to_string())
        }
    }
    .map_err(encode_err)?;

    tracing::debug!(%format, count = records.len(), "encoded record document");
    Ok(text)
}
