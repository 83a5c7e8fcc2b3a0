//! Document display.

use crate::cli::ShowArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

pub fn handle(args: &ShowArgs, settings: &Settings) -> Result<(), CliError> {
    let kind = util::resolve_kind(&args.kind)?;
    let format = util::document_format(&args.file, args.format)?;
    let mut records = util::read_records(kind, &args.file, format)?;

    if let Some(index) = args.index {
        let index = util::check_index(index, records.len())?;
        records = vec![records.swap_remove(index)];
    }

    let out = output::render_records(settings, &records)?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
