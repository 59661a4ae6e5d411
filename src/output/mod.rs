//! Artifact output: naming, writing and digests

pub mod artifact_writer;
pub mod hash_generator;

pub use artifact_writer::{ArtifactWriter, WrittenArtifact, FILE_PREFIX, FILE_TIME_FORMAT};
pub use hash_generator::sha256_hex;
