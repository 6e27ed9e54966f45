//! PDF text extraction
//!
//! The engine sits behind [`TextExtractor`] so the HTTP layer never touches
//! MuPDF directly:
//!
//! - [`MupdfExtractor`]: opens a byte buffer with MuPDF and returns the text
//!   of every page, in page order
//! - [`TextService`]: runs an extractor off the async workers and joins the
//!   per-page text into one string

mod error;
mod mupdf_extractor;
mod service;

pub use error::{ExtractError, Result};
pub use mupdf_extractor::MupdfExtractor;
pub use service::TextService;

/// A synchronous PDF-to-text capability.
///
/// Implementations are called from a blocking thread and must not share
/// mutable state between calls.
pub trait TextExtractor: Send + Sync {
    /// Extract the text of every page, in page order.
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>>;

    /// Engine name reported by the health endpoint.
    fn engine(&self) -> &'static str {
        "custom"
    }
}
