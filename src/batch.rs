//! Batch driver: runs the document pipeline over every input document
//!
//! Documents are processed strictly one after another. A failure in one
//! document is recorded as a failed outcome and the batch moves on; only
//! configuration, source or destination problems abort the run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, instrument, warn};

use crate::{
    config::BatchConfig,
    error::{Error, Result},
    extraction::{PdfTextExtractor, TextExtractor},
    output::ArtifactWriter,
    pipeline::DocumentPipeline,
    redaction::{load_terms, Redactor},
    report::BatchReport,
    types::{BatchOutcome, BatchSummary, OutcomeStatus, TermSet},
};

/// Runs one configured batch with a given extraction backend
#[derive(Debug)]
pub struct BatchRunner<E: TextExtractor = PdfTextExtractor> {
    config: BatchConfig,
    extractor: E,
}

impl BatchRunner<PdfTextExtractor> {
    pub fn new(config: BatchConfig) -> Self {
        Self::with_extractor(config, PdfTextExtractor::new())
    }
}

impl<E: TextExtractor> BatchRunner<E> {
    pub fn with_extractor(config: BatchConfig, extractor: E) -> Self {
        Self { config, extractor }
    }

    /// Loads the term file and processes every document.
    pub fn run(&self) -> Result<Vec<BatchOutcome>> {
        self.config.validate()?;
        let terms = load_terms(&self.config.terms_file)?;
        self.run_with_terms(&terms)
    }

    /// Validates the config and lists the documents a run would process.
    pub fn plan(&self) -> Result<Vec<PathBuf>> {
        self.config.validate()?;
        discover_documents(&self.config.input_dir, &self.config)
    }

    /// Processes every document with an already loaded term set.
    #[instrument(skip(self, terms), fields(input = %self.config.input_dir.display()))]
    pub fn run_with_terms(&self, terms: &TermSet) -> Result<Vec<BatchOutcome>> {
        if terms.is_empty() {
            warn!("No redaction terms configured - output text will be unchanged");
        }
        let redactor = Redactor::new(&terms.ordered(self.config.term_order))?;

        let documents = discover_documents(&self.config.input_dir, &self.config)?;
        let writer = ArtifactWriter::new(&self.config.output_dir)?;

        if documents.is_empty() {
            warn!(
                "No .{} files found in {}",
                self.config.extension.trim_start_matches('.'),
                self.config.input_dir.display()
            );
            return Ok(Vec::new());
        }
        info!("Found {} documents to process", documents.len());

        let pipeline = DocumentPipeline::new(&self.extractor, &redactor);
        let mut outcomes = Vec::with_capacity(documents.len());

        for path in &documents {
            let filename = display_name(path);
            info!("Processing: {}", filename);

            let outcome = match pipeline
                .process(path, &filename)
                .and_then(|result| writer.write(&result).map(|written| (result, written)))
            {
                Ok((result, written)) => {
                    info!("Redaction completed: {}", written.path.display());
                    BatchOutcome::succeeded(
                        filename,
                        written.path,
                        result.page_count(),
                        result.total_replacements(),
                        written.sha256,
                    )
                }
                Err(e) => {
                    error!("Failed to process {}: {}", filename, e);
                    BatchOutcome::failed(filename, e)
                }
            };
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Writes the configured report, if any. Report problems never fail the batch.
    pub fn write_report(&self, outcomes: &[BatchOutcome]) {
        if let Some(path) = &self.config.report_path {
            match BatchReport::new(outcomes.to_vec()).write_to(path) {
                Ok(()) => info!("Report written: {}", path.display()),
                Err(e) => warn!("Failed to write report {}: {}", path.display(), e),
            }
        }
    }
}

/// Lists matching documents directly inside `dir`, sorted by file name.
pub fn discover_documents(dir: &Path, config: &BatchConfig) -> Result<Vec<PathBuf>> {
    let source_err = |source| Error::Source {
        path: dir.to_path_buf(),
        source,
    };

    let mut documents = Vec::new();
    for entry in fs::read_dir(dir).map_err(source_err)? {
        let path = entry.map_err(source_err)?.path();
        if path.is_file() && config.matches_extension(&path) {
            documents.push(path);
        }
    }
    documents.sort();
    Ok(documents)
}

/// Logs the user-facing end-of-batch summary.
pub fn log_summary(outcomes: &[BatchOutcome]) -> BatchSummary {
    let summary = BatchSummary::from_outcomes(outcomes);
    info!(
        "Text redaction complete: {} successful, {} failed, {} replacements",
        summary.succeeded, summary.failed, summary.replacements
    );
    for outcome in outcomes {
        if let OutcomeStatus::Failed { error } = &outcome.status {
            error!("  {}: {}", outcome.filename, error);
        }
    }
    summary
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
