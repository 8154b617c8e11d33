//! Error types for the extraction pipeline

use nanosynth_index::IndexError;
use thiserror::Error;

/// Errors that can occur during extraction
///
/// Response-format failures are deliberately absent: a malformed model
/// output is recovered as an error-marked record, never an `Err`.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Embedding service failure during retrieval
    #[error("Embedding service error: {0}")]
    Embedding(String),

    /// Generative service failure
    #[error("Generative service error: {0}")]
    Generative(String),

    /// Index file missing or unreadable; fatal for this pipeline instance
    #[error("Corrupt index: {0}")]
    CorruptIndex(String),

    /// Document exceeds the configured maximum length
    #[error("Document too long: {0} chars (max: {1})")]
    DocumentTooLong(usize, usize),

    /// Prompt template could not be loaded
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<IndexError> for ExtractError {
    fn from(e: IndexError) -> Self {
        match e {
            IndexError::Corrupt { .. } => ExtractError::CorruptIndex(e.to_string()),
            other => ExtractError::Embedding(other.to_string()),
        }
    }
}
