//! PDF text-layer extraction built on lopdf

use std::path::Path;

use lopdf::Document;
use tracing::{debug, instrument};

use super::{PageSource, TextExtractor};
use crate::error::ExtractionError;
use crate::types::PageText;

/// Extracts the text layer of PDF files. No OCR: image-only pages come back empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

/// A loaded PDF and its page numbers in physical order.
#[derive(Debug)]
pub struct PdfDocumentHandle {
    document: Document,
    page_numbers: Vec<u32>,
}

impl TextExtractor for PdfTextExtractor {
    type Handle = PdfDocumentHandle;

    #[instrument(skip(self))]
    fn open(&self, path: &Path) -> Result<Self::Handle, ExtractionError> {
        let document = Document::load(path).map_err(|e| ExtractionError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if document.trailer.get(b"Encrypt").is_ok() {
            return Err(ExtractionError::Encrypted(path.to_path_buf()));
        }

        // get_pages is keyed by page number, so keys come back in page order
        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        debug!("Opened {} with {} pages", path.display(), page_numbers.len());

        Ok(PdfDocumentHandle {
            document,
            page_numbers,
        })
    }
}

impl PageSource for PdfDocumentHandle {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn pages(&self) -> Box<dyn Iterator<Item = Result<PageText, ExtractionError>> + '_> {
        Box::new(self.page_numbers.iter().enumerate().map(move |(i, number)| {
            let index = i as u32 + 1;
            self.document
                .extract_text(&[*number])
                .map(|text| PageText::new(index, text))
                .map_err(|e| ExtractionError::Page {
                    page: index,
                    reason: e.to_string(),
                })
        }))
    }
}
