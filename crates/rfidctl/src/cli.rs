//! Clap derive structures for the `rfidctl` CLI.
//!
//! Defines the command tree, global flags, and shared value enums. This
//! file is also compiled by `build.rs` for man page generation, so it may
//! only depend on `clap` and `clap_complete`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// rfidctl -- inspect and edit RFID reader configuration and status records
#[derive(Debug, Parser)]
#[command(
    name = "rfidctl",
    version,
    about = "Inspect and edit RFID reader configuration and status records",
    long_about = "Works with the data records exchanged with an RFID reader SDK:\n\
        endpoint configuration, Wi-Fi profiles, certificate listings, scan\n\
        results and status events. Records are read from and written to\n\
        JSON, YAML or TOML documents using the SDK's own field names.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format [default: table, or `defaults.output` from config]
    #[arg(long, short = 'o', env = "RFIDCTL_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: auto, or `defaults.color` from config]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Print secret fields (passwords) in table and plain output
    #[arg(long, global = true)]
    pub show_secrets: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Document syntax for `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocFormat {
    Json,
    Yaml,
    Toml,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the record kinds in the catalog
    #[command(alias = "k")]
    Kinds,

    /// Describe the fields of a record kind
    #[command(alias = "f")]
    Fields(FieldsArgs),

    /// Emit an all-defaults record of a kind
    #[command(alias = "t")]
    Template(TemplateArgs),

    /// Decode a record document and display it
    #[command(alias = "s")]
    Show(ShowArgs),

    /// Set fields on a record and display or save the result
    Set(SetArgs),

    /// Manage rfidctl configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Record Commands ──────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Record kind (see `rfidctl kinds`)
    pub kind: String,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Record kind (see `rfidctl kinds`)
    pub kind: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Record kind (see `rfidctl kinds`)
    pub kind: String,

    /// Document to read
    pub file: PathBuf,

    /// Document syntax (inferred from the file extension when omitted)
    #[arg(long, short = 'f')]
    pub format: Option<DocFormat>,

    /// Show only the record at this position (0-based)
    #[arg(long, short = 'i')]
    pub index: Option<usize>,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Record kind (see `rfidctl kinds`)
    pub kind: String,

    /// FIELD=VALUE assignments; FIELD is a wire or accessor name
    #[arg(required = true, value_name = "FIELD=VALUE")]
    pub assignments: Vec<String>,

    /// Document to start from (an empty record when omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Document syntax (inferred from the file extension when omitted)
    #[arg(long, short = 'f')]
    pub format: Option<DocFormat>,

    /// Record to modify when the document holds several (0-based)
    #[arg(long, short = 'i')]
    pub index: Option<usize>,

    /// Save the result back to --file instead of printing it
    #[arg(long, short = 'w', requires = "file")]
    pub write: bool,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the configuration file path
    Path,

    /// Show the effective configuration
    Show,

    /// Set a default (output, color, mask_secrets)
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
