//! Nanosynth Domain Layer
//!
//! This crate contains the core data model for nanosynth: the material
//! category taxonomy, the extracted synthesis record, and the trait
//! interfaces for the external AI services. Infrastructure implementations
//! (Gemini clients, the vector index, output writers) live in other crates.
//!
//! ## Key Concepts
//!
//! - **SynthesisRecord**: one extracted synthesis event - every parameter
//!   field is optional because papers rarely report all of them
//! - **MaterialCategory**: closed enumeration of the supported material
//!   classes, with a named `Other` default instead of a stringly fallback
//! - **Provider traits**: seams for the generative and embedding services,
//!   so the pipeline can be tested against deterministic mocks

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use category::MaterialCategory;
pub use record::SynthesisRecord;
