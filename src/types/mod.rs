// Type definitions for the text redaction pipeline

pub mod document;

pub use document::*;
