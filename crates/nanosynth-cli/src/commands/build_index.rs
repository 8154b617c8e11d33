//! Build-index command implementation.

use crate::cli::BuildIndexArgs;
use crate::error::{CliError, Result};
use nanosynth_index::VectorIndex;
use nanosynth_llm::GeminiEmbedder;
use serde::Deserialize;
use std::fs;
use tracing::info;

/// One worked example from the curated corpus. Only the text snippet is
/// embedded; any other fields in the file are ignored.
#[derive(Debug, Deserialize)]
struct ExampleEntry {
    text_snippet: String,
}

/// Execute the build-index command.
pub fn execute_build_index(args: BuildIndexArgs) -> Result<()> {
    let data = fs::read_to_string(&args.examples)?;
    let entries: Vec<ExampleEntry> = serde_json::from_str(&data)?;
    if entries.is_empty() {
        return Err(CliError::Config(format!(
            "no examples found in {}",
            args.examples.display()
        )));
    }

    let texts: Vec<String> = entries.into_iter().map(|e| e.text_snippet).collect();
    info!(examples = texts.len(), "Embedding example corpus");

    let embedder = GeminiEmbedder::from_env()?;
    let index = VectorIndex::build_with(&embedder, &texts)?;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    index.persist(&args.output)?;

    println!(
        "Built index with {} example(s) -> {}",
        index.len(),
        args.output.display()
    );

    Ok(())
}
