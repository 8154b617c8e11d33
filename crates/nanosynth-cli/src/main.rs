//! Nanosynth CLI - extract nanomaterial synthesis parameters from papers.

use clap::Parser;
use nanosynth_cli::commands;
use nanosynth_cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> nanosynth_cli::Result<()> {
    // Load .env credentials if present; real environment wins.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Extract(args) => commands::execute_extract(args),
        Command::BuildIndex(args) => commands::execute_build_index(args),
        Command::Search(args) => commands::execute_search(args),
    }
}
