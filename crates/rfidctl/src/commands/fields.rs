//! Field table of a record kind.

use serde::Serialize;
use tabled::Tabled;

use rfid_model::{FieldSpec, FieldType};

use crate::cli::FieldsArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Serialize)]
struct FieldInfo {
    wire: &'static str,
    accessor: &'static str,
    label: &'static str,
    #[serde(rename = "type")]
    field_type: FieldType,
    secret: bool,
}

impl From<&FieldSpec> for FieldInfo {
    fn from(spec: &FieldSpec) -> Self {
        Self {
            wire: spec.wire,
            accessor: spec.accessor,
            label: spec.label,
            field_type: spec.field_type,
            secret: spec.secret,
        }
    }
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Wire Name")]
    wire: &'static str,
    #[tabled(rename = "Accessor")]
    accessor: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Type")]
    field_type: String,
    #[tabled(rename = "Secret")]
    secret: &'static str,
}

impl From<&FieldInfo> for FieldRow {
    fn from(f: &FieldInfo) -> Self {
        Self {
            wire: f.wire,
            accessor: f.accessor,
            label: f.label,
            field_type: f.field_type.to_string(),
            secret: if f.secret { "yes" } else { "" },
        }
    }
}

pub fn handle(args: &FieldsArgs, settings: &Settings) -> Result<(), CliError> {
    let kind = util::resolve_kind(&args.kind)?;
    let fields: Vec<FieldInfo> = kind.fields().iter().map(FieldInfo::from).collect();

    let out = output::render_list(settings.output, &fields, |f| FieldRow::from(f), |f| {
        f.wire.to_owned()
    })?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
