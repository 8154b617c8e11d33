//! Nanosynth CLI library
//!
//! Command-line workflow around the extraction pipeline: pull text out of
//! a PDF, run the retrieval-augmented extractor against it, and write the
//! records as JSON or CSV. Also hosts the index-build step and the Serper
//! paper discovery helper.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod pdf;
pub mod search;

pub use cli::{CategoryArg, Cli, Command, FormatArg};
pub use error::{CliError, Result};
