//! Unified error handling for the CLI.

use crate::config::ConfigError;
use std::path::PathBuf;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Engine error: {0}")]
    Engine(#[from] iddelta_engine::Error),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result type alias for commands.
pub type Result<T> = std::result::Result<T, AppError>;
