//! Error types for chunklines.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LineError>;

/// Errors that can occur while opening or reading a line source.
///
/// Every I/O variant names the operation that failed. Nothing is retried:
/// the error surfaces from the call that hit it.
#[derive(Debug, Error)]
pub enum LineError {
    /// The source path could not be opened for reading.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// Path that was being opened.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// A chunk read failed.
    #[error("read failed at offset {offset}: {source}")]
    Read {
        /// Absolute offset the read was issued at.
        offset: u64,
        /// Underlying error.
        source: io::Error,
    },

    /// Positioning the source before a chunk read failed.
    #[error("seek to offset {offset} failed: {source}")]
    Seek {
        /// Absolute offset that was requested.
        offset: u64,
        /// Underlying error.
        source: io::Error,
    },

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The source has already been released.
    #[error("line source is closed")]
    Closed,
}

impl LineError {
    /// Returns the underlying I/O error, if this is an I/O failure.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            LineError::Open { source, .. }
            | LineError::Read { source, .. }
            | LineError::Seek { source, .. } => Some(source),
            LineError::InvalidConfig { .. } | LineError::Closed => None,
        }
    }
}
