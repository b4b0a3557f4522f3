//! Error types for the iddelta engine.
//!
//! The delta and index operations are total and never fail. Errors only come
//! from turning snapshots and reports into or out of JSON.

use thiserror::Error;

/// All possible errors from the iddelta engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("invalid delta: {0}")]
    InvalidDelta(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
