//! Configuration management for the CLI.
//!
//! Values come from the environment (optionally a `.env` file loaded by
//! `main`) and are then overridden by command-line flags.

use std::env;
use std::str::FromStr;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Output format
    pub format: OutputFormat,
    /// Drop records with identity 0 before comparing snapshots
    pub skip_unassigned: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("IDDELTA_FORMAT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        let skip_unassigned = match lookup("IDDELTA_SKIP_UNASSIGNED") {
            Some(value) => parse_flag("IDDELTA_SKIP_UNASSIGNED", &value)?,
            None => false,
        };

        Ok(Self {
            format,
            skip_unassigned,
        })
    }

    /// Apply command-line overrides. A set flag always wins.
    pub fn with_overrides(mut self, format: Option<OutputFormat>, skip_unassigned: bool) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self.skip_unassigned |= skip_unassigned;
        self
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid output format '{0}' (expected text or json)")]
    InvalidFormat(String),

    #[error("Invalid {name} value '{value}' (expected true or false)")]
    InvalidFlag { name: &'static str, value: String },
}
