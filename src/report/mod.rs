//! Batch outcome reporting

use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{BatchOutcome, BatchSummary};

pub mod formatter;

pub use formatter::ReportFormatter;

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    PlainText,
    Json,
}

impl ReportFormat {
    /// `.json` selects JSON; anything else is plain text.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::PlainText,
        }
    }
}

/// Report generation errors
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Everything known about one finished batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub generated_at: String,
    pub summary: BatchSummary,
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    pub fn new(outcomes: Vec<BatchOutcome>) -> Self {
        Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            summary: BatchSummary::from_outcomes(&outcomes),
            outcomes,
        }
    }

    /// Writes the report, picking the format from the file extension.
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        let body = ReportFormatter::format(self, ReportFormat::for_path(path))?;
        std::fs::write(path, body)?;
        Ok(())
    }
}
