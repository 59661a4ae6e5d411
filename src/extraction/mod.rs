//! Page text extraction
//!
//! The pipeline only sees the two traits below; the PDF backend lives in
//! [`pdf_extractor`] and tests substitute their own sources.

use std::path::Path;

use crate::error::ExtractionError;
use crate::types::PageText;

pub mod pdf_extractor;

pub use pdf_extractor::{PdfDocumentHandle, PdfTextExtractor};

/// Label written to the artifact header for text-layer extraction.
pub const PLAIN_TEXT_METHOD: &str = "plain text";

/// Opens documents and hands back a page source for each.
pub trait TextExtractor {
    type Handle: PageSource;

    fn open(&self, path: &Path) -> Result<Self::Handle, ExtractionError>;

    /// Human-readable extraction method, recorded in output headers.
    fn method(&self) -> &'static str {
        PLAIN_TEXT_METHOD
    }
}

/// An opened document yielding its pages lazily, in page order from 1.
pub trait PageSource {
    fn page_count(&self) -> usize;

    fn pages(&self) -> Box<dyn Iterator<Item = Result<PageText, ExtractionError>> + '_>;
}
