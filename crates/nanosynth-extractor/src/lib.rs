//! Nanosynth Extractor
//!
//! Retrieval-augmented extraction of nanomaterial synthesis parameters
//! from document text.
//!
//! # Architecture
//!
//! ```text
//! Text → retrieve examples (VectorIndex) → PromptBuilder → LLM
//!      → normalize/repair → SynthesisRecords (+ confidence)
//! ```
//!
//! # Key Features
//!
//! - **Retrieval-augmented prompts**: the k most similar worked examples
//!   are embedded in every prompt
//! - **Category conditioning**: per-material guidance appended to the
//!   base template
//! - **Defensive normalization**: fenced, escaped, or outright broken
//!   model output is repaired or contained, never fatal
//! - **Confidence scoring**: cheap per-record reliability heuristic
//!
//! # Example Usage
//!
//! ```
//! use nanosynth_extractor::{Extractor, ExtractorConfig};
//! use nanosynth_domain::MaterialCategory;
//! use nanosynth_index::{IndexHandle, MockEmbedding, VectorIndex};
//! use nanosynth_llm::MockProvider;
//!
//! let embedder = MockEmbedding::new(16);
//! let index = VectorIndex::build_with(&embedder, &[
//!     "ZnO synthesized hydrothermally at 180°C".to_string(),
//! ]).unwrap();
//!
//! let llm = MockProvider::new(r#"[{"precursor": "zinc nitrate"}]"#);
//! let extractor = Extractor::new(
//!     llm,
//!     embedder,
//!     IndexHandle::new(index),
//!     ExtractorConfig::default(),
//! );
//!
//! let records = extractor
//!     .extract(MaterialCategory::MetalOxides, "paper text")
//!     .unwrap();
//! assert_eq!(records[0].precursor.as_deref(), Some("zinc nitrate"));
//! ```

#![warn(missing_docs)]

mod config;
mod confidence;
mod error;
mod extractor;
mod normalize;
mod prompt;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use confidence::score;
pub use error::ExtractError;
pub use extractor::Extractor;
pub use normalize::{normalize, INVALID_FORMAT_MARKER};
pub use prompt::{category_hint, PromptBuilder};
