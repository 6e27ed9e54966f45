//! Extraction error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Zero-byte upload
    #[error("cannot open empty document")]
    Empty,

    /// The buffer could not be opened as a PDF
    #[error("{0}")]
    Open(String),

    /// A page failed to load or yield text
    #[error("page {index}: {message}")]
    Page { index: usize, message: String },

    /// Configured deadline expired
    #[error("operation timed out after {0} seconds")]
    Timeout(u64),

    /// The blocking task panicked or was cancelled
    #[error("extraction task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

impl From<mupdf::Error> for ExtractError {
    fn from(err: mupdf::Error) -> Self {
        ExtractError::Open(err.to_string())
    }
}
