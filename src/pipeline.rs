//! Per-document pipeline: extract pages, redact each, assemble the artifact

use std::path::Path;

use chrono::{DateTime, Local};
use tracing::{debug, info, instrument};

use crate::{
    error::Result,
    extraction::{PageSource, TextExtractor},
    redaction::Redactor,
    types::DocumentResult,
};

/// Timestamp format used in the artifact header.
pub const HEADER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Composes an extractor and a redactor over single documents.
#[derive(Debug)]
pub struct DocumentPipeline<'a, E: TextExtractor> {
    extractor: &'a E,
    redactor: &'a Redactor,
}

impl<'a, E: TextExtractor> DocumentPipeline<'a, E> {
    pub fn new(extractor: &'a E, redactor: &'a Redactor) -> Self {
        Self {
            extractor,
            redactor,
        }
    }

    /// Opens `path` and runs every page through the redactor.
    ///
    /// The processing timestamp is taken once, before the document is opened.
    #[instrument(skip(self, path), fields(document = %filename))]
    pub fn process(&self, path: &Path, filename: &str) -> Result<DocumentResult> {
        let processed_at = Local::now();
        let handle = self.extractor.open(path)?;
        self.process_pages(&handle, filename, processed_at)
    }

    /// Redacts the pages of an already opened document.
    pub fn process_pages<S: PageSource>(
        &self,
        source: &S,
        filename: &str,
        processed_at: DateTime<Local>,
    ) -> Result<DocumentResult> {
        let mut pages = Vec::with_capacity(source.page_count());
        for page in source.pages() {
            let page = page?;
            debug!("Redacting page {}", page.index);
            pages.push(self.redactor.redact_page(page));
        }

        let result = DocumentResult {
            source_name: filename.to_string(),
            extraction_method: self.extractor.method(),
            processed_at,
            pages,
        };
        info!(
            "Extracted {} pages, {} replacements",
            result.page_count(),
            result.total_replacements()
        );
        Ok(result)
    }
}

impl DocumentResult {
    /// Renders the text artifact: header block then one delimited section
    /// per page. Header and delimiters are never redacted.
    pub fn render(&self) -> String {
        let body_len: usize = self.pages.iter().map(|p| p.text.len() + 24).sum();
        let mut output = String::with_capacity(160 + body_len);

        output.push_str(&format!("# Redacted Content from {}\n", self.source_name));
        output.push_str(&format!("# Extraction Method: {}\n", self.extraction_method));
        output.push_str(&format!(
            "# Processed: {}\n",
            self.processed_at.format(HEADER_TIME_FORMAT)
        ));

        for page in &self.pages {
            output.push_str(&format!("\n--- Page {} ---\n\n", page.index));
            output.push_str(&page.text);
            output.push('\n');
        }

        output
    }
}
