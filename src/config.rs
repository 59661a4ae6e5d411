//! Batch configuration value object and validation

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::TermOrder;

pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_TERMS_FILE: &str = "terms_to_redact.txt";
pub const DEFAULT_EXTENSION: &str = "pdf";

/// Everything one batch run needs, passed explicitly to the batch driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Directory scanned (non-recursively) for input documents
    pub input_dir: PathBuf,
    /// Directory receiving the redacted text artifacts
    pub output_dir: PathBuf,
    /// Newline-delimited term list
    pub terms_file: PathBuf,
    /// Input file extension, compared case-insensitively
    pub extension: String,
    pub term_order: TermOrder,
    /// Optional path for a report of all outcomes
    pub report_path: Option<PathBuf>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            terms_file: PathBuf::from(DEFAULT_TERMS_FILE),
            extension: DEFAULT_EXTENSION.to_string(),
            term_order: TermOrder::default(),
            report_path: None,
        }
    }
}

impl BatchConfig {
    /// Loads a config file, trying JSON first and then YAML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| Error::ConfigError(format!("Config parsing error: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() {
            return Err(Error::ConfigError("Document extension must not be empty".into()));
        }
        if self.input_dir == self.output_dir {
            return Err(Error::ConfigError(format!(
                "Output directory must differ from input directory: {}",
                self.input_dir.display()
            )));
        }
        Ok(())
    }

    /// Whether `path` has the configured document extension.
    pub fn matches_extension(&self, path: &Path) -> bool {
        let wanted = self.extension.trim_start_matches('.');
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(wanted))
            .unwrap_or(false)
    }
}
