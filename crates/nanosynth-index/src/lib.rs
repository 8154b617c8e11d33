//! Nanosynth Retrieval Index
//!
//! In-memory vector similarity search over the worked-example corpus.
//!
//! # Architecture
//!
//! - Exact cosine nearest-neighbor search over embedded example texts.
//!   The corpus is a handful of curated examples, so a flat scan gives
//!   exact ordering with stable ties, which approximate structures cannot.
//! - Build once, query many: the index is immutable after construction.
//!   Rebuilds replace the whole index through `IndexHandle`'s atomic swap.
//! - JSON persistence; a missing or malformed index file is a hard
//!   `IndexError::Corrupt`, never a silently empty index.

#![warn(missing_docs)]

pub mod embedding;
pub mod vector_index;

pub use embedding::{cosine_similarity, MockEmbedding};
pub use vector_index::{ExampleDocument, IndexError, IndexHandle, VectorIndex};
