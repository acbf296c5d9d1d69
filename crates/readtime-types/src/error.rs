//! Error types for readtime.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for readtime operations.
pub type Result<T> = std::result::Result<T, ReadtimeError>;

/// Errors that can occur while loading documents or options.
///
/// The estimation functions themselves never fail; these errors only cover
/// the I/O and decoding around them.
#[derive(Error, Debug)]
pub enum ReadtimeError {
    /// Reading an input file failed.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Options JSON could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
