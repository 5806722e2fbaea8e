//! binstat CLI

use anyhow::{Context, Result};
use binstat_io::CompareConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod compare;
mod summarize;

#[derive(Parser)]
#[command(name = "binstat")]
#[command(about = "binstat - compare histograms across result directories")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    /// JSON run configuration; unset keys keep their defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate the histograms shared by several result directories
    Compare(compare::CompareArgs),

    /// Summarize mean records written by earlier comparisons
    Summarize(summarize::SummarizeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_string().to_lowercase()));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let config = match &cli.config {
        Some(path) => CompareConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CompareConfig::default(),
    };

    match cli.command {
        Commands::Compare(args) => compare::run(&args, &config),
        Commands::Summarize(args) => summarize::run(&args, &config),
    }
}
