//! Error types for the zcount-core library.
//!
//! Scanning itself never fails (read errors degrade to end-of-stream), so
//! the error surface is small: opening an input file and parsing a numeric
//! option value are the only fallible operations. Both variants render the
//! exact line the CLI prints to the error stream.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for zcount operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all zcount operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to open an input file for scanning
    #[error("{path}: {source}")]
    FileOpen {
        /// Path to the file that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An option value that must be a non-negative integer was not one
    #[error("'{token}' is not a non-negative integer")]
    InvalidCount {
        /// The offending token as given on the command line
        token: String,
    },
}

impl Error {
    /// Creates a new file open error
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Creates a new invalid count error
    pub fn invalid_count(token: impl Into<String>) -> Self {
        Self::InvalidCount {
            token: token.into(),
        }
    }
}
