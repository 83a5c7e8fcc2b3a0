//! CLI configuration: TOML defaults layered with environment overrides.
//!
//! Resolution order: built-in defaults < config file < `RFIDCTL_*` env
//! vars < command-line flags. Nested keys in env vars use a double
//! underscore (`RFIDCTL_DEFAULTS__MASK_SECRETS=false`).

use std::path::PathBuf;

use clap::ValueEnum;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── TOML config structs ──────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Mask secret fields in table and plain output.
    #[serde(default = "default_mask_secrets")]
    pub mask_secrets: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            mask_secrets: default_mask_secrets(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_mask_secrets() -> bool {
    true
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "rfidctl", "rfidctl").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("rfidctl");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Loading / saving ─────────────────────────────────────────────────

/// Load the full Config from defaults, file, and environment.
pub fn load_config() -> Result<Config, CliError> {
    let path = config_path();
    tracing::debug!(path = %path.display(), "loading configuration");

    let config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("RFIDCTL_").split("__"))
        .extract()?;
    Ok(config)
}

/// Serialize config to TOML and write it to the canonical path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, CliError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, text)?;
    Ok(path)
}

// ── Effective settings ───────────────────────────────────────────────

/// Presentation settings after merging flags over config.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub output: OutputFormat,
    pub color: ColorMode,
    pub mask_secrets: bool,
    pub quiet: bool,
}

impl Settings {
    pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Result<Self, CliError> {
        let output = match global.output {
            Some(o) => o,
            None => parse_output(&cfg.defaults.output)?,
        };
        let color = match global.color {
            Some(c) => c,
            None => parse_color(&cfg.defaults.color)?,
        };
        Ok(Self {
            output,
            color,
            mask_secrets: cfg.defaults.mask_secrets && !global.show_secrets,
            quiet: global.quiet,
        })
    }
}

pub fn parse_output(raw: &str) -> Result<OutputFormat, CliError> {
    OutputFormat::from_str(raw, true).map_err(|_| CliError::Validation {
        field: "output".into(),
        reason: format!("expected table, json, json-compact, yaml or plain, got '{raw}'"),
    })
}

pub fn parse_color(raw: &str) -> Result<ColorMode, CliError> {
    ColorMode::from_str(raw, true).map_err(|_| CliError::Validation {
        field: "color".into(),
        reason: format!("expected auto, always or never, got '{raw}'"),
    })
}
