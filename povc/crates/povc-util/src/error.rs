//! Error types for povc-util.

use thiserror::Error;

/// Errors raised while loading scene files.
#[derive(Debug, Error)]
pub enum SourceMapError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
