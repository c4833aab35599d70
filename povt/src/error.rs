//! Error handling module for the povt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the povt CLI application.
#[derive(Error, Debug)]
pub enum PovtError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a scene file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<povc_util::SourceMapError> for PovtError {
    fn from(err: povc_util::SourceMapError) -> Self {
        PovtError::FileOperation(err.to_string())
    }
}

/// Result type alias using PovtError.
pub type Result<T> = std::result::Result<T, PovtError>;
