//! Extract command implementation.

use crate::cli::{ExtractArgs, FormatArg};
use crate::error::Result;
use crate::output::{save_to_csv, save_to_json};
use crate::pdf::extract_text_from_pdf;
use nanosynth_extractor::{Extractor, ExtractorConfig, PromptBuilder};
use nanosynth_index::{IndexHandle, VectorIndex};
use nanosynth_llm::{GeminiEmbedder, GeminiProvider};
use std::path::PathBuf;
use tracing::info;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs) -> Result<()> {
    let llm = GeminiProvider::from_env()?;
    let embedder = GeminiEmbedder::from_env()?;

    let index = VectorIndex::load(&args.index)?;
    info!(path = %args.index.display(), examples = index.len(), "Loaded retrieval index");

    let mut extractor = Extractor::new(
        llm,
        embedder,
        IndexHandle::new(index),
        ExtractorConfig::default(),
    );
    if let Some(template) = &args.template {
        extractor = extractor.with_prompt_builder(PromptBuilder::from_file(template)?);
    }

    let text = extract_text_from_pdf(&args.pdf)?;
    let records = extractor.extract(args.category.into(), &text)?;

    let output = args.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "output/extracted_parameters.{}",
            args.format.extension()
        ))
    });
    match args.format {
        FormatArg::Json => save_to_json(&records, &output)?,
        FormatArg::Csv => save_to_csv(&records, &output)?,
    }

    println!("{}", serde_json::to_string_pretty(&records)?);
    println!();
    println!(
        "Extracted {} record(s) -> {}",
        records.len(),
        output.display()
    );

    Ok(())
}
