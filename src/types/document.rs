//! Core data model shared by the loader, redactor, pipeline and batch driver

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A literal string configured for redaction.
///
/// Stored trimmed and with its original casing; matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term(String);

impl Term {
    /// Builds a term from a raw line, trimming surrounding whitespace.
    /// Returns `None` when nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, used for longest-first ordering.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordering applied to a term set before redaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TermOrder {
    /// Longest terms first; ties keep their listed order
    #[default]
    LongestFirst,
    /// Exactly the order of the term file
    AsListed,
}

/// Ordered collection of all terms loaded for a run. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: Vec<Term>,
}

impl TermSet {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Returns a copy of the set arranged for redaction under `order`.
    pub fn ordered(&self, order: TermOrder) -> TermSet {
        let mut terms = self.terms.clone();
        if order == TermOrder::LongestFirst {
            // stable: equal lengths keep input order
            terms.sort_by(|a, b| b.char_len().cmp(&a.char_len()));
        }
        TermSet { terms }
    }
}

impl FromIterator<Term> for TermSet {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Raw extracted text of one page. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub index: u32,
    pub text: String,
}

impl PageText {
    pub fn new(index: u32, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Page text after substitution, with the same page index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactedPageText {
    pub index: u32,
    pub text: String,
    pub replacements: usize,
}

/// Redacted pages of one document plus its header metadata.
#[derive(Debug, Clone)]
pub struct DocumentResult {
    pub source_name: String,
    pub extraction_method: &'static str,
    pub processed_at: DateTime<Local>,
    pub pages: Vec<RedactedPageText>,
}

impl DocumentResult {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn total_replacements(&self) -> usize {
        self.pages.iter().map(|p| p.replacements).sum()
    }
}

/// Result of processing one document within a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    Succeeded {
        output_path: PathBuf,
        pages: usize,
        replacements: usize,
        sha256: String,
    },
    Failed {
        error: String,
    },
}

/// Per-document success/failure record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub filename: String,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl BatchOutcome {
    pub fn succeeded(
        filename: impl Into<String>,
        output_path: PathBuf,
        pages: usize,
        replacements: usize,
        sha256: String,
    ) -> Self {
        Self {
            filename: filename.into(),
            status: OutcomeStatus::Succeeded {
                output_path,
                pages,
                replacements,
                sha256,
            },
        }
    }

    pub fn failed(filename: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            filename: filename.into(),
            status: OutcomeStatus::Failed {
                error: error.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, OutcomeStatus::Succeeded { .. })
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        match &self.status {
            OutcomeStatus::Succeeded { output_path, .. } => Some(output_path),
            OutcomeStatus::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            OutcomeStatus::Failed { error } => Some(error),
            OutcomeStatus::Succeeded { .. } => None,
        }
    }
}

/// Aggregate counts over a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub replacements: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        let mut summary = Self {
            total: outcomes.len(),
            ..Default::default()
        };
        for outcome in outcomes {
            match &outcome.status {
                OutcomeStatus::Succeeded { replacements, .. } => {
                    summary.succeeded += 1;
                    summary.replacements += replacements;
                }
                OutcomeStatus::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    /// True only when there was work and none of it succeeded.
    pub fn all_failed(&self) -> bool {
        self.total > 0 && self.succeeded == 0
    }
}
