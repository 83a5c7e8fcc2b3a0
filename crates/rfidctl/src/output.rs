//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Tables use `tabled`,
//! structured formats use serde, plain emits one identifier per line.
//! Secret fields are masked in table and plain output only; structured
//! output always carries the exact record.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use rfid_model::{AnyRecord, FieldSpec, FieldValue};
use tabled::builder::Builder;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::config::Settings;
use crate::error::CliError;

const MASK: &str = "********";

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the original data via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(Table::new(rows).with(Style::rounded()).to_string())
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(data.iter().map(&id_fn).collect::<Vec<_>>().join("\n")),
    }
}

/// Render decoded records.
///
/// Structured formats emit one record as a bare object and several as an
/// array, mirroring the document layout. Tables show a detail view for a
/// single record and one row per record otherwise.
pub fn render_records(settings: &Settings, records: &[AnyRecord]) -> Result<String, CliError> {
    match (settings.output, records) {
        (_, []) => Ok(String::new()),
        (OutputFormat::Json, [single]) => render_json(single, false),
        (OutputFormat::JsonCompact, [single]) => render_json(single, true),
        (OutputFormat::Yaml, [single]) => render_yaml(single),
        (OutputFormat::Json, many) => render_json(many, false),
        (OutputFormat::JsonCompact, many) => render_json(many, true),
        (OutputFormat::Yaml, many) => render_yaml(many),
        (OutputFormat::Plain, many) => Ok(many
            .iter()
            .map(AnyRecord::headline)
            .collect::<Vec<_>>()
            .join("\n")),
        (OutputFormat::Table, [single]) => Ok(render_detail(settings, single)),
        (OutputFormat::Table, many) => Ok(render_record_table(settings, many)),
    }
}

/// Render every field of a record, unset ones included at their default.
pub fn render_snapshot(settings: &Settings, record: &AnyRecord) -> Result<String, CliError> {
    match settings.output {
        OutputFormat::Json => render_json(&record.snapshot(), false),
        OutputFormat::JsonCompact => render_json(&record.snapshot(), true),
        OutputFormat::Yaml => render_yaml(&record.snapshot()),
        OutputFormat::Plain => Ok(record
            .fields()
            .iter()
            .filter_map(|spec| {
                let value = record.field(spec.wire)?;
                Some(format!(
                    "{}={}",
                    spec.wire,
                    display_value(spec, &value, settings.mask_secrets)
                ))
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => Ok(render_detail(settings, record)),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Record views ─────────────────────────────────────────────────────

/// Text shown for a field value in human-oriented output.
pub fn display_value(spec: &FieldSpec, value: &FieldValue, mask_secrets: bool) -> String {
    if spec.secret && mask_secrets && !value.is_default() {
        MASK.to_owned()
    } else {
        value.to_string()
    }
}

fn render_detail(settings: &Settings, record: &AnyRecord) -> String {
    let color = should_color(settings.color);
    let specs = record.fields();
    let width = specs.iter().map(|s| s.label.len()).max().unwrap_or(0) + 1;

    specs
        .iter()
        .filter_map(|spec| {
            let value = record.field(spec.wire)?;
            let label = format!("{:<width$}", format!("{}:", spec.label));
            let label = if color {
                label.cyan().to_string()
            } else {
                label
            };
            Some(format!(
                "{label} {}",
                display_value(spec, &value, settings.mask_secrets)
            ))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_record_table(settings: &Settings, records: &[AnyRecord]) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };
    let specs = first.fields();

    let mut builder = Builder::default();
    builder.push_record(specs.iter().map(|s| s.label.to_owned()));
    for record in records {
        builder.push_record(specs.iter().map(|spec| {
            record
                .field(spec.wire)
                .map(|v| display_value(spec, &v, settings.mask_secrets))
                .unwrap_or_default()
        }));
    }
    builder.build().with(Style::rounded()).to_string()
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let result = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    result.map_err(|e| CliError::Render(e.to_string()))
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data)
        .map(|s| s.trim_end().to_owned())
        .map_err(|e| CliError::Render(e.to_string()))
}
