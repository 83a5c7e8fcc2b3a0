//! CLI error types with miette diagnostics.
//!
//! Maps `ModelError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use rfid_model::ModelError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Catalog ──────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(rfidctl::not_found),
        help("Run: rfidctl {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("Record #{index} requested, but the document holds {count}")]
    #[diagnostic(
        code(rfidctl::index_out_of_range),
        help("Record positions start at 0.")
    )]
    IndexOutOfRange { index: usize, count: usize },

    #[error("The document holds {count} records; choose one with --index")]
    #[diagnostic(
        code(rfidctl::ambiguous_record),
        help("Record positions start at 0.")
    )]
    AmbiguousRecord { count: usize },

    // ── Documents ────────────────────────────────────────────────────
    #[error("Cannot tell the document format of {path}")]
    #[diagnostic(
        code(rfidctl::unknown_format),
        help("Use a .json, .yaml, .yml or .toml extension, or pass --format.")
    )]
    UnknownFormat { path: String },

    #[error("Could not read {path}")]
    #[diagnostic(code(rfidctl::read_failed))]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid document: {message}")]
    #[diagnostic(
        code(rfidctl::document),
        help("Documents hold one record object, an array of records, or a `records` array.")
    )]
    Document { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(rfidctl::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(rfidctl::config),
        help("Check the config file shown by: rfidctl config path")
    )]
    Config(Box<figment::Error>),

    #[error("Failed to serialize config: {0}")]
    #[diagnostic(code(rfidctl::config_write))]
    ConfigWrite(#[from] toml::ser::Error),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(rfidctl::render))]
    Render(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::IndexOutOfRange { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::AmbiguousRecord { .. } | Self::UnknownFormat { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── ModelError → CliError mapping ────────────────────────────────────

impl From<ModelError> for CliError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownKind(name) => CliError::NotFound {
                resource_type: "record kind".into(),
                identifier: name,
                list_command: "kinds".into(),
            },

            ModelError::UnknownField { kind, field } => CliError::NotFound {
                resource_type: "field".into(),
                identifier: field,
                list_command: format!("fields {kind}"),
            },

            ModelError::TypeMismatch {
                field,
                expected,
                found,
            } => CliError::Validation {
                field,
                reason: format!("expected {expected}, got {found}"),
            },

            ModelError::InvalidValue { field, reason } => CliError::Validation { field, reason },

            ModelError::UnknownInterfaceCode(code) => CliError::Validation {
                field: "interface type".into(),
                reason: format!("no interface has code {code}"),
            },

            ModelError::Decode { .. } | ModelError::InvalidRecord { .. } => CliError::Document {
                message: err.to_string(),
            },

            ModelError::Encode { .. } => CliError::Render(err.to_string()),
        }
    }
}
