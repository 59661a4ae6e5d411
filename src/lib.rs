//! Offline batch sanitization of PDF text
//!
//! Extracts the plain text of every page of each input PDF, replaces every
//! case-insensitive literal occurrence of the configured terms with
//! `[REDACTED]`, and writes one annotated text artifact per document.

// Configuration and core data model
pub mod config;
pub mod error;
pub mod types;

// Term loading and substitution
pub mod redaction;

// Page text extraction
pub mod extraction;

// Per-document pipeline
pub mod pipeline;

// Artifact writing
pub mod output;

// Batch driver and reporting
pub mod batch;
pub mod report;

// Re-exports for crate consumers
pub use batch::{discover_documents, log_summary, BatchRunner};
pub use config::BatchConfig;
pub use error::{Error, ExtractionError, Result};
pub use extraction::{PageSource, PdfTextExtractor, TextExtractor};
pub use output::{ArtifactWriter, WrittenArtifact};
pub use pipeline::DocumentPipeline;
pub use redaction::{load_terms, parse_terms, redact, Redactor, MARKER};
pub use report::{BatchReport, ReportFormat};
pub use types::{
    BatchOutcome, BatchSummary, DocumentResult, OutcomeStatus, PageText, RedactedPageText, Term,
    TermOrder, TermSet,
};
