//! Configuration for the extraction pipeline

use serde::{Deserialize, Serialize};

/// Configuration for the `Extractor`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Number of nearest examples to retrieve per document
    pub retrieval_k: usize,

    /// Maximum input document length (characters)
    pub max_document_length: usize,

    /// Whether to attach a heuristic confidence score to each record
    pub score_confidence: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.retrieval_k == 0 {
            return Err("retrieval_k must be greater than 0".to_string());
        }
        if self.max_document_length == 0 {
            return Err("max_document_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            retrieval_k: 3,
            max_document_length: 100_000,
            score_confidence: true,
        }
    }
}
