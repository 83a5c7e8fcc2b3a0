//! Command dispatch: bridges CLI args -> record catalog -> output formatting.

pub mod config_cmd;
pub mod fields;
pub mod kinds;
pub mod set;
pub mod show;
pub mod template;
pub mod util;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a record command to the appropriate handler.
pub fn dispatch(cmd: Command, settings: &Settings) -> Result<(), CliError> {
    match cmd {
        Command::Kinds => kinds::handle(settings),
        Command::Fields(args) => fields::handle(&args, settings),
        Command::Template(args) => template::handle(&args, settings),
        Command::Show(args) => show::handle(&args, settings),
        Command::Set(args) => set::handle(&args, settings),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
