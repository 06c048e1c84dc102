//! Error types for replayed-core

use thiserror::Error;

/// Main error type for the replayed-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// History file discovery error
    #[error("history discovery error: {0}")]
    Discovery(String),
}

/// Result type alias for replayed-core
pub type Result<T> = std::result::Result<T, Error>;
