// ── Field descriptors and dynamic values ──

use std::fmt;

use serde::Serialize;

use crate::error::ModelError;
use crate::model::{ConnectedInterfaceType, StatusMap};

/// Value shape of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free-form string; reads as `""` when unset.
    Text,
    /// Boolean; reads as `false` when unset.
    Flag,
    /// Enumerated transport interface.
    Interface,
    /// Key/value status entries.
    Entries,
}

impl FieldType {
    /// Parse command-line text into a value of this shape.
    ///
    /// `field` names the target in error messages only.
    pub fn parse(self, field: &str, raw: &str) -> Result<FieldValue, ModelError> {
        match self {
            Self::Text => Ok(FieldValue::Text(raw.to_owned())),
            Self::Flag => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(FieldValue::Flag(true)),
                "false" | "no" | "off" | "0" => Ok(FieldValue::Flag(false)),
                other => Err(ModelError::InvalidValue {
                    field: field.to_owned(),
                    reason: format!("expected true/false, got '{other}'"),
                }),
            },
            Self::Interface => {
                let trimmed = raw.trim();
                let parsed = match trimmed.parse::<i32>() {
                    Ok(code) => ConnectedInterfaceType::try_from(code),
                    Err(_) => trimmed.parse::<ConnectedInterfaceType>().map_err(|_| {
                        ModelError::InvalidValue {
                            field: field.to_owned(),
                            reason: format!(
                                "expected one of unknown, bluetooth, usb, wifi, got '{trimmed}'"
                            ),
                        }
                    }),
                };
                parsed.map(FieldValue::Interface)
            }
            Self::Entries => serde_json::from_str::<StatusMap>(raw)
                .map(FieldValue::Entries)
                .map_err(|e| ModelError::InvalidValue {
                    field: field.to_owned(),
                    reason: format!("expected a JSON object: {e}"),
                }),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Flag => "flag",
            Self::Interface => "interface type",
            Self::Entries => "status entries",
        };
        f.write_str(name)
    }
}

/// Static description of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Rust accessor name (`tenant_id`).
    pub accessor: &'static str,
    /// Vendor field name used on the wire (`tenantid`).
    pub wire: &'static str,
    /// Human-readable label for tables.
    pub label: &'static str,
    pub field_type: FieldType,
    /// Credentials that display layers mask by default.
    pub secret: bool,
}

impl FieldSpec {
    /// Whether `name` refers to this field by wire or accessor name.
    pub fn matches(&self, name: &str) -> bool {
        self.wire == name || self.accessor == name
    }
}

/// A field value read or written through the dynamic layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Interface(ConnectedInterfaceType),
    Entries(StatusMap),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Text(_) => FieldType::Text,
            Self::Flag(_) => FieldType::Flag,
            Self::Interface(_) => FieldType::Interface,
            Self::Entries(_) => FieldType::Entries,
        }
    }

    /// Whether this is the value an unset field reads as.
    pub fn is_default(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Flag(b) => !b,
            Self::Interface(t) => *t == ConnectedInterfaceType::default(),
            Self::Entries(m) => m.is_empty(),
        }
    }

    pub(crate) fn into_text(self, field: &str) -> Result<String, ModelError> {
        match self {
            Self::Text(s) => Ok(s),
            other => Err(mismatch(field, FieldType::Text, &other)),
        }
    }

    pub(crate) fn into_flag(self, field: &str) -> Result<bool, ModelError> {
        match self {
            Self::Flag(b) => Ok(b),
            other => Err(mismatch(field, FieldType::Flag, &other)),
        }
    }

    pub(crate) fn into_interface(self, field: &str) -> Result<ConnectedInterfaceType, ModelError> {
        match self {
            Self::Interface(t) => Ok(t),
            other => Err(mismatch(field, FieldType::Interface, &other)),
        }
    }

    pub(crate) fn into_entries(self, field: &str) -> Result<StatusMap, ModelError> {
        match self {
            Self::Entries(m) => Ok(m),
            other => Err(mismatch(field, FieldType::Entries, &other)),
        }
    }
}

fn mismatch(field: &str, expected: FieldType, found: &FieldValue) -> ModelError {
    ModelError::TypeMismatch {
        field: field.to_owned(),
        expected,
        found: found.field_type(),
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Interface(t) => write!(f, "{t}"),
            Self::Entries(m) => {
                let joined = m
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                f.write_str(&joined)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::StatusValue;

    #[test]
    fn flag_parse_accepts_common_spellings() {
        for raw in ["true", "YES", "on", "1"] {
            assert_eq!(
                FieldType::Flag.parse("isHidden", raw).unwrap(),
                FieldValue::Flag(true)
            );
        }
        for raw in ["false", "No", "off", "0"] {
            assert_eq!(
                FieldType::Flag.parse("isHidden", raw).unwrap(),
                FieldValue::Flag(false)
            );
        }
    }

    #[test]
    fn flag_parse_rejects_garbage() {
        let err = FieldType::Flag.parse("isHidden", "maybe").unwrap_err();
        assert!(matches!(err, ModelError::InvalidValue { ref field, .. } if field == "isHidden"));
    }

    #[test]
    fn text_parse_keeps_raw_input() {
        assert_eq!(
            FieldType::Text.parse("url", " spaced ").unwrap(),
            FieldValue::Text(" spaced ".into())
        );
    }

    #[test]
    fn interface_parse_accepts_name_and_code() {
        assert_eq!(
            FieldType::Interface.parse("iface", "WiFi").unwrap(),
            FieldValue::Interface(ConnectedInterfaceType::Wifi)
        );
        assert_eq!(
            FieldType::Interface.parse("iface", "1").unwrap(),
            FieldValue::Interface(ConnectedInterfaceType::Bluetooth)
        );
        assert!(matches!(
            FieldType::Interface.parse("iface", "42").unwrap_err(),
            ModelError::UnknownInterfaceCode(42)
        ));
    }

    #[test]
    fn entries_parse_reads_json_object() {
        let value = FieldType::Entries
            .parse("statusDictionary", r#"{"connected": true, "rssi": -61}"#)
            .unwrap();
        let FieldValue::Entries(map) = value else {
            panic!("expected entries");
        };
        assert_eq!(map.get("connected"), Some(&StatusValue::Bool(true)));
        assert_eq!(map.get("rssi"), Some(&StatusValue::Integer(-61)));
    }

    #[test]
    fn into_text_reports_mismatch() {
        let err = FieldValue::Flag(true).into_text("url").unwrap_err();
        assert!(matches!(
            err,
            ModelError::TypeMismatch {
                expected: FieldType::Text,
                found: FieldType::Flag,
                ..
            }
        ));
    }

    #[test]
    fn display_joins_entries() {
        let mut map = StatusMap::new();
        map.insert("state".into(), StatusValue::from("up"));
        map.insert("channel".into(), StatusValue::from(6_i64));
        assert_eq!(FieldValue::Entries(map).to_string(), "state=up, channel=6");
    }
}
