//! Report formatter implementation

use super::{BatchReport, ReportError, ReportFormat};
use crate::types::OutcomeStatus;

/// Formats batch reports into the supported output formats
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format(report: &BatchReport, format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::PlainText => Ok(Self::to_text(report)),
            ReportFormat::Json => Self::to_json(report),
        }
    }

    fn to_text(report: &BatchReport) -> String {
        let summary = &report.summary;
        let mut output = String::new();
        output.push_str("Text Redaction Report\n");
        output.push_str("=====================\n\n");
        output.push_str(&format!("Generated: {}\n", report.generated_at));
        output.push_str(&format!(
            "Documents: {} total, {} succeeded, {} failed\n",
            summary.total, summary.succeeded, summary.failed
        ));
        output.push_str(&format!("Replacements: {}\n\n", summary.replacements));

        for outcome in &report.outcomes {
            match &outcome.status {
                OutcomeStatus::Succeeded {
                    output_path,
                    pages,
                    replacements,
                    sha256,
                } => output.push_str(&format!(
                    "OK     {} -> {} ({} pages, {} replacements, sha256 {})\n",
                    outcome.filename,
                    output_path.display(),
                    pages,
                    replacements,
                    sha256
                )),
                OutcomeStatus::Failed { error } => {
                    output.push_str(&format!("FAILED {}: {}\n", outcome.filename, error))
                }
            }
        }

        output
    }

    fn to_json(report: &BatchReport) -> Result<String, ReportError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}
