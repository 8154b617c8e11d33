//! Trait definitions for the external AI services
//!
//! These traits define the boundaries between the extraction pipeline and
//! the network services it depends on. Infrastructure implementations live
//! in `nanosynth-llm`; deterministic mocks exist for testing.

/// Trait for the generative text-completion service
///
/// Implemented by the infrastructure layer (nanosynth-llm)
pub trait GenerativeProvider {
    /// Error type for generation operations
    type Error;

    /// Generate a text completion for a fully rendered prompt
    ///
    /// The returned text is raw model output: possibly fenced in Markdown,
    /// possibly malformed JSON. Transport and auth failures surface as
    /// `Self::Error` and are never retried at this layer.
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// Trait for the text-embedding service
///
/// Implemented by the infrastructure layer (nanosynth-llm)
pub trait EmbeddingProvider {
    /// Error type for embedding operations
    type Error;

    /// Embed a text into a fixed-length vector
    fn embed(&self, text: &str) -> Result<Vec<f32>, Self::Error>;

    /// Dimension of the vectors this provider produces
    fn dimension(&self) -> usize;
}
