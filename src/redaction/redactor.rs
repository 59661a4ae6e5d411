//! Case-insensitive literal term substitution
//!
//! Every term is escaped before it is compiled, so term content is always
//! matched as literal characters. Terms are applied one after another over the
//! same text: a later term sees the output of earlier substitutions, which
//! makes the result depend on term order. There is no word-boundary anchoring;
//! a term also matches inside longer words.

use regex::{NoExpand, Regex, RegexBuilder};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{PageText, RedactedPageText, TermSet};

/// Literal written in place of every matched term occurrence.
pub const MARKER: &str = "[REDACTED]";

/// Compiled matchers for one term set, in application order.
#[derive(Debug, Clone)]
pub struct Redactor {
    matchers: Vec<Regex>,
}

impl Redactor {
    /// Compiles one case-insensitive literal matcher per term, keeping the
    /// order of `terms`.
    pub fn new(terms: &TermSet) -> Result<Self> {
        let matchers = terms
            .iter()
            .enumerate()
            .map(|(i, term)| {
                RegexBuilder::new(&regex::escape(term.as_str()))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        // term text stays out of the message
                        Error::ConfigError(format!("Cannot compile redaction term #{}: {}", i + 1, e))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Compiled {} redaction matchers", matchers.len());
        Ok(Self { matchers })
    }

    /// Returns `text` with every term occurrence replaced by [`MARKER`].
    pub fn redact(&self, text: &str) -> String {
        self.redact_counted(text).0
    }

    /// Like [`Redactor::redact`], also returning the number of substitutions.
    pub fn redact_counted(&self, text: &str) -> (String, usize) {
        self.matchers
            .iter()
            .fold((text.to_string(), 0), |(current, count), matcher| {
                let hits = matcher.find_iter(&current).count();
                if hits == 0 {
                    (current, count)
                } else {
                    let replaced = matcher.replace_all(&current, NoExpand(MARKER)).into_owned();
                    (replaced, count + hits)
                }
            })
    }

    pub fn redact_page(&self, page: PageText) -> RedactedPageText {
        let (text, replacements) = self.redact_counted(&page.text);
        RedactedPageText {
            index: page.index,
            text,
            replacements,
        }
    }
}

/// One-shot redaction of `text` with `terms` applied in the given order.
pub fn redact(text: &str, terms: &TermSet) -> Result<String> {
    Ok(Redactor::new(terms)?.redact(text))
}
