//! Core extraction pipeline

use crate::config::ExtractorConfig;
use crate::confidence;
use crate::error::ExtractError;
use crate::normalize::normalize;
use crate::prompt::PromptBuilder;
use nanosynth_domain::traits::{EmbeddingProvider, GenerativeProvider};
use nanosynth_domain::{MaterialCategory, SynthesisRecord};
use nanosynth_index::IndexHandle;
use tracing::{debug, info};

/// The Extractor converts document text into structured synthesis records
///
/// One `extract` call performs two sequential network round trips: an
/// embedding query for retrieval and the generative completion. Transport
/// failures from either propagate to the caller untouched; there is no
/// retry loop at this level. Parsing failures never propagate - they
/// surface as error-marked records.
pub struct Extractor<L, E>
where
    L: GenerativeProvider,
    E: EmbeddingProvider,
{
    llm: L,
    embedder: E,
    index: IndexHandle,
    prompt_builder: PromptBuilder,
    config: ExtractorConfig,
}

impl<L, E> Extractor<L, E>
where
    L: GenerativeProvider,
    E: EmbeddingProvider,
    L::Error: std::fmt::Display,
    E::Error: std::fmt::Display,
{
    /// Create a new Extractor
    pub fn new(llm: L, embedder: E, index: IndexHandle, config: ExtractorConfig) -> Self {
        Self {
            llm,
            embedder,
            index,
            prompt_builder: PromptBuilder::new(),
            config,
        }
    }

    /// Use a custom prompt template instead of the built-in one
    pub fn with_prompt_builder(mut self, prompt_builder: PromptBuilder) -> Self {
        self.prompt_builder = prompt_builder;
        self
    }

    /// Handle to the retrieval index, for atomic rebuild swaps
    pub fn index(&self) -> &IndexHandle {
        &self.index
    }

    /// Extract synthesis records from document text
    pub fn extract(
        &self,
        category: MaterialCategory,
        document_text: &str,
    ) -> Result<Vec<SynthesisRecord>, ExtractError> {
        let text_len = document_text.chars().count();
        if text_len > self.config.max_document_length {
            return Err(ExtractError::DocumentTooLong(
                text_len,
                self.config.max_document_length,
            ));
        }

        info!(%category, text_len, "Starting extraction");

        // Snapshot the index once; a concurrent rebuild cannot affect
        // this call.
        let index = self.index.snapshot();
        let examples = index.query(&self.embedder, document_text, self.config.retrieval_k)?;
        debug!(retrieved = examples.len(), "Retrieved worked examples");

        let prompt = self
            .prompt_builder
            .build(category, document_text, &examples);
        debug!(prompt_len = prompt.len(), "Built prompt");

        let raw_response = self
            .llm
            .generate(&prompt)
            .map_err(|e| ExtractError::Generative(e.to_string()))?;
        debug!(response_len = raw_response.len(), "Model responded");

        let mut records = normalize(&raw_response, category);

        if self.config.score_confidence {
            for record in &mut records {
                record.confidence = Some(confidence::score(record.text_snippet.as_deref()));
            }
        }

        info!(records = records.len(), "Extraction complete");
        Ok(records)
    }
}
