//! Record kind listing.

use serde::Serialize;
use strum::IntoEnumIterator;
use tabled::Tabled;

use rfid_model::RecordKind;

use crate::config::Settings;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct KindInfo {
    kind: RecordKind,
    fields: usize,
    description: &'static str,
}

#[derive(Tabled)]
struct KindRow {
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Fields")]
    fields: usize,
    #[tabled(rename = "Description")]
    description: &'static str,
}

impl From<&KindInfo> for KindRow {
    fn from(info: &KindInfo) -> Self {
        Self {
            kind: info.kind.to_string(),
            fields: info.fields,
            description: info.description,
        }
    }
}

pub fn handle(settings: &Settings) -> Result<(), CliError> {
    let kinds: Vec<KindInfo> = RecordKind::iter()
        .map(|kind| KindInfo {
            kind,
            fields: kind.fields().len(),
            description: kind.description(),
        })
        .collect();

    let out = output::render_list(settings.output, &kinds, |k| KindRow::from(k), |k| {
        k.kind.to_string()
    })?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
