//! # Configuration
//!
//! Settings resolve with a fixed override order:
//! defaults → config file → env vars → CLI flags.
//!
//! The config file lives at `~/.pocketcalc/config.toml` unless `--config` points
//! elsewhere. A missing default file just means defaults; a missing file named
//! with `--config` is an error.
//!
//! ```toml
//! [general]
//! output = "text"              # "text" or "json"
//! parse_policy = "strict"      # "strict" or "coerce-zero"
//! reference_date = 2026-10-18  # pin "today" for the age calculator
//!
//! [logging]
//! level = "warn"               # off, error, warn, info, debug, trace
//! file = "/tmp/pocketcalc.log" # stderr when unset
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use calc_core::inputs::ParsePolicy;
use calc_core::settings::CalcSettings;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use thiserror::Error;

use crate::cli::Cli;

/// Env var overriding the parse policy
pub const POLICY_ENV: &str = "POCKETCALC_POLICY";

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PocketcalcConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub output: Option<OutputFormat>,
    pub parse_policy: Option<ParsePolicy>,
    pub reference_date: Option<toml::value::Datetime>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub output: OutputFormat,
    pub settings: CalcSettings,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.pocketcalc/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pocketcalc").join("config.toml"))
}

/// Load the config file.
///
/// `explicit` is the `--config` flag. Without it the default path is tried and
/// silently skipped when absent.
pub fn load_config(explicit: Option<&Path>) -> Result<PocketcalcConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(PocketcalcConfig::default()),
        },
    };

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_config(&contents)
}

/// Parse config text.
pub fn parse_config(contents: &str) -> Result<PocketcalcConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapse defaults → config file → env vars → CLI into concrete values.
///
/// `env_policy` is the value of [`POLICY_ENV`], passed in so tests do not touch
/// the process environment.
pub fn resolve(
    config: &PocketcalcConfig,
    cli: &Cli,
    env_policy: Option<&str>,
) -> Result<ResolvedConfig, ConfigError> {
    let env_policy = env_policy
        .map(|raw| {
            raw.parse::<ParsePolicy>().map_err(|reason| ConfigError::Invalid {
                key: POLICY_ENV.to_string(),
                reason,
            })
        })
        .transpose()?;

    let parse_policy = cli
        .policy
        .or(env_policy)
        .or(config.general.parse_policy)
        .unwrap_or_default();

    let reference_date = match cli.today {
        Some(date) => Some(date),
        None => config
            .general
            .reference_date
            .as_ref()
            .map(toml_date)
            .transpose()?,
    };

    let output = if cli.json {
        OutputFormat::Json
    } else {
        config.general.output.unwrap_or_default()
    };

    let log_level = match cli.verbose {
        0 => match &config.logging.level {
            Some(level) => level.parse::<LevelFilter>().map_err(|_| ConfigError::Invalid {
                key: "logging.level".to_string(),
                reason: format!("unknown level '{}'", level),
            })?,
            None => LevelFilter::Warn,
        },
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Ok(ResolvedConfig {
        output,
        settings: CalcSettings {
            parse_policy,
            reference_date,
        },
        log_level,
        log_file: config.logging.file.clone(),
    })
}

fn toml_date(value: &toml::value::Datetime) -> Result<NaiveDate, ConfigError> {
    let invalid = || ConfigError::Invalid {
        key: "general.reference_date".to_string(),
        reason: format!("expected a plain date, got {}", value),
    };
    match (value.date, value.time) {
        (Some(date), None) => {
            NaiveDate::from_ymd_opt(i32::from(date.year), u32::from(date.month), u32::from(date.day))
                .ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}
