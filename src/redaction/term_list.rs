//! Loading of the newline-delimited term configuration

use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::error::{Error, Result};
use crate::types::{Term, TermSet};

const BOM: char = '\u{feff}';

/// Loads the term set from `path`.
///
/// A missing file yields an empty set; any other open or read failure is a
/// configuration error.
#[instrument]
pub fn load_terms(path: &Path) -> Result<TermSet> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Terms file not found: {} - continuing without redaction terms", path.display());
            return Ok(TermSet::default());
        }
        Err(e) => {
            return Err(Error::ConfigError(format!(
                "Cannot open terms file {}: {}",
                path.display(),
                e
            )))
        }
    };

    let terms = parse_terms(BufReader::new(file)).map_err(|e| {
        Error::ConfigError(format!("Cannot read terms file {}: {}", path.display(), e))
    })?;

    info!("Loaded {} redaction terms", terms.len());
    Ok(terms)
}

/// Parses one term per line, trimming each and skipping blank lines.
/// Input order is kept and duplicates are not removed.
pub fn parse_terms<R: BufRead>(reader: R) -> io::Result<TermSet> {
    let mut terms = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let line = if n == 0 { line.trim_start_matches(BOM) } else { &line };
        if let Some(term) = Term::new(line) {
            terms.push(term);
        }
    }
    Ok(TermSet::new(terms))
}
