//! MuPDF-backed text extraction

use mupdf::{Document, Page, TextPageOptions};

use super::{ExtractError, Result, TextExtractor};

const PDF_MAGIC: &str = "application/pdf";

/// [`TextExtractor`] backed by MuPDF.
///
/// A fresh `Document` is opened for every call and dropped before it returns,
/// so nothing MuPDF-owned outlives the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct MupdfExtractor;

impl MupdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for MupdfExtractor {
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>> {
        if data.is_empty() {
            return Err(ExtractError::Empty);
        }

        let doc = Document::from_bytes(data, PDF_MAGIC)?;
        let page_count = doc.page_count()?;

        let mut pages = Vec::with_capacity(page_count.max(0) as usize);
        for index in 0..page_count {
            let page_error = |e: mupdf::Error| ExtractError::Page {
                index: index as usize,
                message: e.to_string(),
            };
            let page = doc.load_page(index).map_err(page_error)?;
            pages.push(page_text(&page).map_err(page_error)?);
        }

        Ok(pages)
    }

    fn engine(&self) -> &'static str {
        "mupdf"
    }
}

/// Plain text of one page: structured-text lines joined with `\n`, with the
/// page's outer whitespace trimmed.
fn page_text(page: &Page) -> std::result::Result<String, mupdf::Error> {
    let text_page = page.to_text_page(TextPageOptions::empty())?;

    let mut lines = Vec::new();
    for block in text_page.blocks() {
        for line in block.lines() {
            let text: String = line.chars().filter_map(|c| c.char()).collect();
            lines.push(text);
        }
    }

    Ok(lines.join("\n").trim().to_string())
}
