// ── Model error types ──
//
// The typed accessors are total and never produce these. Errors only arise
// in the dynamic layer (by-name field access, text parsing) and in the
// document codec.

use thiserror::Error;

use crate::codec::DocumentFormat;
use crate::field::FieldType;
use crate::kind::RecordKind;

/// Unified error type for the model crate.
#[derive(Debug, Error)]
pub enum ModelError {
    // ── Catalog lookups ──────────────────────────────────────────────
    #[error("unknown record kind '{0}'")]
    UnknownKind(String),

    #[error("{kind} records have no field '{field}'")]
    UnknownField { kind: RecordKind, field: String },

    // ── Field values ─────────────────────────────────────────────────
    #[error("field '{field}' holds {expected}, not {found}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        found: FieldType,
    },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("unknown connected interface code {0}")]
    UnknownInterfaceCode(i32),

    // ── Documents ────────────────────────────────────────────────────
    #[error("failed to decode {format} document: {message}")]
    Decode {
        format: DocumentFormat,
        message: String,
    },

    #[error("record #{index} is not a valid {kind}: {message}")]
    InvalidRecord {
        kind: RecordKind,
        index: usize,
        message: String,
    },

    #[error("failed to encode {format} document: {message}")]
    Encode {
        format: DocumentFormat,
        message: String,
    },
}
