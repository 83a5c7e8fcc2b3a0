//! All-defaults record of a kind.

use rfid_model::AnyRecord;

use crate::cli::TemplateArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

pub fn handle(args: &TemplateArgs, settings: &Settings) -> Result<(), CliError> {
    let kind = util::resolve_kind(&args.kind)?;
    let record = AnyRecord::default_for(kind);

    let out = output::render_snapshot(settings, &record)?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
