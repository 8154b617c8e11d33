//! Flat cosine vector index over the example corpus
//!
//! Stores every example document with its embedding and answers k-nearest
//! queries by exact scan. Exactness matters here: result order must be
//! ascending distance with ties broken by insertion order, a guarantee
//! approximate graph indexes do not make. The corpus is small (tens of
//! curated examples), so the scan is also the fast option.

use nanosynth_domain::traits::EmbeddingProvider;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::{debug, info};

use crate::embedding::cosine_similarity;

/// Errors that can occur during index operations
#[derive(Error, Debug)]
pub enum IndexError {
    /// Invalid embedding dimension
    #[error("Invalid embedding dimension: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension provided
        actual: usize,
    },

    /// Embedding service failure while building or querying
    #[error("Embedding service error: {0}")]
    Embedding(String),

    /// Index file missing, unreadable, or structurally invalid
    #[error("Corrupt index at {path}: {reason}")]
    Corrupt {
        /// Path of the offending index file
        path: String,
        /// What went wrong
        reason: String,
    },

    /// Failure writing the index file
    #[error("Failed to persist index to {path}: {reason}")]
    Persist {
        /// Target path
        path: String,
        /// What went wrong
        reason: String,
    },
}

/// A retrieval corpus entry: example text plus its embedding
///
/// Identity is positional; documents are created at index-build time and
/// read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleDocument {
    /// The example text included verbatim in prompts
    pub text: String,

    /// Embedding vector for the text
    pub embedding: Vec<f32>,
}

/// Immutable nearest-neighbor index over example documents
///
/// # Examples
///
/// ```
/// use nanosynth_index::VectorIndex;
///
/// let index = VectorIndex::build(vec![
///     ("ZnO from zinc nitrate".to_string(), vec![1.0, 0.0]),
///     ("CdS from thiourea".to_string(), vec![0.0, 1.0]),
/// ]).unwrap();
///
/// let results = index.search(&[1.0, 0.1], 1).unwrap();
/// assert_eq!(results[0].0, "ZnO from zinc nitrate");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorIndex {
    dimension: usize,
    documents: Vec<ExampleDocument>,
}

impl VectorIndex {
    /// Build an index from (text, embedding) pairs
    ///
    /// Accepts any count, including zero; all embeddings must share one
    /// dimension.
    pub fn build(
        examples: impl IntoIterator<Item = (String, Vec<f32>)>,
    ) -> Result<Self, IndexError> {
        let mut dimension = 0;
        let mut documents = Vec::new();

        for (text, embedding) in examples {
            if documents.is_empty() {
                dimension = embedding.len();
            } else if embedding.len() != dimension {
                return Err(IndexError::DimensionMismatch {
                    expected: dimension,
                    actual: embedding.len(),
                });
            }
            documents.push(ExampleDocument { text, embedding });
        }

        info!(documents = documents.len(), dimension, "Built vector index");
        Ok(Self {
            dimension,
            documents,
        })
    }

    /// Build an index by embedding each example text with the given provider
    pub fn build_with<E>(embedder: &E, texts: &[String]) -> Result<Self, IndexError>
    where
        E: EmbeddingProvider,
        E::Error: std::fmt::Display,
    {
        let pairs = texts
            .iter()
            .map(|text| {
                let embedding = embedder
                    .embed(text)
                    .map_err(|e| IndexError::Embedding(e.to_string()))?;
                Ok((text.clone(), embedding))
            })
            .collect::<Result<Vec<_>, IndexError>>()?;

        Self::build(pairs)
    }

    /// Number of documents in the index
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the index holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Embedding dimension of the stored documents (0 when empty)
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Find the k nearest documents to a query embedding
    ///
    /// Returns `(text, distance)` pairs ordered by ascending cosine
    /// distance. Ties keep insertion order (the sort is stable). `k` is
    /// clamped to the number of stored documents.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(&str, f32)>, IndexError> {
        if self.documents.is_empty() {
            return Ok(Vec::new());
        }
        if query.len() != self.dimension {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let mut scored: Vec<(&str, f32)> = self
            .documents
            .iter()
            .map(|doc| {
                let distance = 1.0 - cosine_similarity(query, &doc.embedding);
                (doc.text.as_str(), distance)
            })
            .collect();

        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored.truncate(k);
        Ok(scored)
    }

    /// Embed `text` and return the k most similar example texts
    pub fn query<E>(&self, embedder: &E, text: &str, k: usize) -> Result<Vec<String>, IndexError>
    where
        E: EmbeddingProvider,
        E::Error: std::fmt::Display,
    {
        let query_embedding = embedder
            .embed(text)
            .map_err(|e| IndexError::Embedding(e.to_string()))?;

        let results = self.search(&query_embedding, k)?;
        debug!(requested = k, returned = results.len(), "Retrieved examples");
        Ok(results
            .into_iter()
            .map(|(text, _)| text.to_string())
            .collect())
    }

    /// Serialize the index to a file
    pub fn persist<P: AsRef<Path>>(&self, path: P) -> Result<(), IndexError> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| IndexError::Persist {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::to_writer(file, self).map_err(|e| IndexError::Persist {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        info!(path = %path.display(), documents = self.len(), "Persisted vector index");
        Ok(())
    }

    /// Load an index from a file
    ///
    /// A missing or malformed file is a `Corrupt` error; this never falls
    /// back to an empty index.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let corrupt = |reason: String| IndexError::Corrupt {
            path: path.display().to_string(),
            reason,
        };

        let file = std::fs::File::open(path).map_err(|e| corrupt(e.to_string()))?;
        let index: VectorIndex =
            serde_json::from_reader(std::io::BufReader::new(file))
                .map_err(|e| corrupt(e.to_string()))?;

        // Reject files whose vectors disagree on dimension
        if index
            .documents
            .iter()
            .any(|doc| doc.embedding.len() != index.dimension)
        {
            return Err(corrupt("inconsistent embedding dimensions".to_string()));
        }

        info!(path = %path.display(), documents = index.len(), "Loaded vector index");
        Ok(index)
    }
}

/// Shared handle to the current index snapshot
///
/// Readers clone the inner `Arc` and use that snapshot for their entire
/// call; a rebuild swaps the `Arc` rather than mutating the index in
/// place, so in-flight queries are never affected.
#[derive(Debug, Clone)]
pub struct IndexHandle {
    inner: Arc<RwLock<Arc<VectorIndex>>>,
}

impl IndexHandle {
    /// Wrap an index in a swappable handle
    pub fn new(index: VectorIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(index))),
        }
    }

    /// Get the current index snapshot
    pub fn snapshot(&self) -> Arc<VectorIndex> {
        Arc::clone(&self.inner.read().unwrap())
    }

    /// Replace the index with a freshly built one
    pub fn replace(&self, index: VectorIndex) {
        *self.inner.write().unwrap() = Arc::new(index);
    }
}
