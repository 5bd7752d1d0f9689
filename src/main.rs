//! Command-line entry point for manifest-driven bulk downloads.

use bulkfetch::{AppConfig, FetcherBuilder, JobRunner, Manifest};
use clap::Parser;
use std::path::PathBuf;
use tracing::error;

/// Download a batch of files described by a JSON manifest.
#[derive(Debug, Parser)]
#[command(name = "bulkfetch", version, about)]
struct Cli {
    /// Manifest describing the collection to download.
    #[arg(default_value = "data.json")]
    manifest: PathBuf,

    /// Configuration file.
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Error loading config: {}, using defaults", e);
        AppConfig::default()
    });

    if let Err(e) = bulkfetch::logging::init(&config.logging) {
        eprintln!("Failed to set up logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&cli, &config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, config: &AppConfig) -> bulkfetch::Result<()> {
    println!("Reading download data...");
    let manifest = Manifest::from_file(&cli.manifest).await?;

    let fetcher = FetcherBuilder::from_settings(&config.download).build();
    let runner = JobRunner::new(fetcher);

    println!("Starting downloads...");
    runner.execute(&manifest).await?;

    Ok(())
}
