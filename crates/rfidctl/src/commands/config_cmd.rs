//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Apply `value` to the default named by `key`, validating it first.
fn apply_setting(cfg: &mut Config, key: &str, value: &str) -> Result<(), CliError> {
    match key {
        "output" => {
            config::parse_output(value)?;
            cfg.defaults.output = value.to_ascii_lowercase();
        }
        "color" => {
            config::parse_color(value)?;
            cfg.defaults.color = value.to_ascii_lowercase();
        }
        "mask_secrets" | "mask-secrets" => {
            cfg.defaults.mask_secrets = match value.to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => true,
                "false" | "no" | "off" | "0" => false,
                _ => {
                    return Err(CliError::Validation {
                        field: "mask_secrets".into(),
                        reason: format!("expected true/false, got '{value}'"),
                    });
                }
            };
        }
        other => {
            return Err(CliError::Validation {
                field: other.into(),
                reason: "unknown setting; expected output, color or mask_secrets".into(),
            });
        }
    }
    Ok(())
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let text = toml::to_string_pretty(&cfg)?;
            output::print_output(text.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config()?;
            apply_setting(&mut cfg, &key, &value)?;
            let path = config::save_config(&cfg)?;
            tracing::info!(path = %path.display(), %key, "saved configuration");
            if !global.quiet {
                eprintln!("Set defaults.{key} = {value} in {}", path.display());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn settings_are_validated() {
        let mut cfg = Config::default();
        apply_setting(&mut cfg, "output", "JSON").unwrap();
        apply_setting(&mut cfg, "mask_secrets", "off").unwrap();
        assert_eq!(cfg.defaults.output, "json");
        assert!(!cfg.defaults.mask_secrets);

        assert!(apply_setting(&mut cfg, "color", "sometimes").is_err());
        assert!(apply_setting(&mut cfg, "theme", "dark").is_err());
        assert_eq!(cfg.defaults.color, "auto");
    }
}
