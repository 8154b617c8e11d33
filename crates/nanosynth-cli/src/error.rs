//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error (missing credentials, bad arguments)
    #[error("Configuration error: {0}")]
    Config(String),

    /// PDF text extraction failure
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Paper search failure
    #[error("Search error: {0}")]
    Search(String),

    /// AI service error
    #[error(transparent)]
    Llm(#[from] nanosynth_llm::LlmError),

    /// Extraction pipeline error
    #[error(transparent)]
    Extract(#[from] nanosynth_extractor::ExtractError),

    /// Vector index error
    #[error(transparent)]
    Index(#[from] nanosynth_index::IndexError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
