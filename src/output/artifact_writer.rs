//! Writes rendered documents to uniquely named files

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, instrument, warn};

use super::hash_generator::sha256_hex;
use crate::error::{Error, Result};
use crate::types::DocumentResult;

pub const FILE_PREFIX: &str = "text_redacted_";
pub const FILE_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// A completed artifact on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub path: PathBuf,
    pub sha256: String,
    pub bytes: usize,
}

/// Writes artifacts into one output directory without ever overwriting.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    /// Creates the output directory if needed. Failure here is fatal for the batch.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| Error::Destination {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `text_redacted_<stem>_<YYYYmmdd_HHMMSS>.txt`, with `_<attempt>` before
    /// the extension when `attempt > 0`.
    pub fn artifact_name(source_name: &str, processed_at: &DateTime<Local>, attempt: u32) -> String {
        let stem = Path::new(source_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| source_name.to_string());
        let stamp = processed_at.format(FILE_TIME_FORMAT);
        if attempt == 0 {
            format!("{}{}_{}.txt", FILE_PREFIX, stem, stamp)
        } else {
            format!("{}{}_{}_{}.txt", FILE_PREFIX, stem, stamp, attempt)
        }
    }

    /// Renders and writes `result` to a fresh file.
    #[instrument(skip(self, result), fields(document = %result.source_name))]
    pub fn write(&self, result: &DocumentResult) -> Result<WrittenArtifact> {
        let content = result.render();

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = Self::artifact_name(&result.source_name, &result.processed_at, attempt);
            let path = self.output_dir.join(name);

            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!("{} exists, trying next name", path.display());
                    continue;
                }
                Err(e) => return Err(Error::Io(e)),
            };

            if let Err(e) = file.write_all(content.as_bytes()).and_then(|_| file.sync_all()) {
                drop(file);
                if let Err(cleanup) = fs::remove_file(&path) {
                    warn!("Failed to remove partial output {}: {}", path.display(), cleanup);
                }
                return Err(Error::Io(e));
            }

            return Ok(WrittenArtifact {
                path,
                sha256: sha256_hex(content.as_bytes()),
                bytes: content.len(),
            });
        }

        Err(Error::Io(std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!(
                "no free output name for {} after {} attempts",
                result.source_name, MAX_NAME_ATTEMPTS
            ),
        )))
    }
}
