//! Error types and handling for the text redaction library

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for redaction operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for redaction operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input location unavailable: {}: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Output location unavailable: {}: {source}", path.display())]
    Destination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Whether this error makes the whole batch meaningless.
    ///
    /// Per-document failures (extraction, write-side I/O) are recovered by the
    /// batch driver; everything else aborts the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::Extraction(_) | Error::Io(_))
    }
}

// -------------------- Sub-Error Categories --------------------

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExtractionError {
    #[error("Failed to open document {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },

    #[error("Document is encrypted: {}", .0.display())]
    Encrypted(PathBuf),

    #[error("Failed to extract text from page {page}: {reason}")]
    Page { page: u32, reason: String },
}
