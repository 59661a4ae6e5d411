//! Term loading and literal redaction

pub mod redactor;
pub mod term_list;

pub use redactor::{redact, Redactor, MARKER};
pub use term_list::{load_terms, parse_terms};
