//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use nanosynth_domain::MaterialCategory;
use std::path::PathBuf;

/// Nanosynth - extract nanomaterial synthesis parameters from papers.
#[derive(Debug, Parser)]
#[command(name = "nanosynth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract synthesis parameters from a PDF
    Extract(ExtractArgs),

    /// Embed the example corpus and persist the retrieval index
    BuildIndex(BuildIndexArgs),

    /// Search the web for candidate papers in a category
    Search(SearchArgs),
}

/// Material category argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CategoryArg {
    /// Metal Oxides
    MetalOxides,
    /// Metal Sulfides
    MetalSulfides,
    /// Metal-Organic Frameworks
    MetalOrganicFrameworks,
    /// Carbon-based
    CarbonBased,
    /// Polymeric Nanomaterials
    PolymericNanomaterials,
    /// Pure Metals / Alloys
    PureMetalsAlloys,
}

impl From<CategoryArg> for MaterialCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::MetalOxides => MaterialCategory::MetalOxides,
            CategoryArg::MetalSulfides => MaterialCategory::MetalSulfides,
            CategoryArg::MetalOrganicFrameworks => MaterialCategory::MetalOrganicFrameworks,
            CategoryArg::CarbonBased => MaterialCategory::CarbonBased,
            CategoryArg::PolymericNanomaterials => MaterialCategory::PolymericNanomaterials,
            CategoryArg::PureMetalsAlloys => MaterialCategory::PureMetalsAlloys,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FormatArg {
    /// JSON array
    Json,
    /// CSV with header row
    Csv,
}

impl FormatArg {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            FormatArg::Json => "json",
            FormatArg::Csv => "csv",
        }
    }
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// PDF document to extract from
    pub pdf: PathBuf,

    /// Material category to extract parameters for
    #[arg(short, long, value_enum)]
    pub category: CategoryArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: FormatArg,

    /// Output file (default: output/extracted_parameters.<format>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path of the persisted retrieval index
    #[arg(short, long, default_value = "rag/example_index.json")]
    pub index: PathBuf,

    /// Custom prompt template file
    #[arg(long)]
    pub template: Option<PathBuf>,
}

/// Arguments for the build-index command.
#[derive(Debug, Parser)]
pub struct BuildIndexArgs {
    /// JSON file of example records (text_snippet fields are embedded)
    #[arg(short, long, default_value = "rag/sample_example.json")]
    pub examples: PathBuf,

    /// Where to write the persisted index
    #[arg(short, long, default_value = "rag/example_index.json")]
    pub output: PathBuf,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Material category to search papers for
    #[arg(short, long, value_enum)]
    pub category: CategoryArg,

    /// Number of results to fetch (capped at 10)
    #[arg(short, long, default_value = "10")]
    pub num_results: usize,
}
