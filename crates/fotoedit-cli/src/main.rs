mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fotoedit", about = "Photo filter and caption tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available filter presets
    Filters(commands::filters::FiltersArgs),
    /// Apply a filter, adjustments and caption to an image and export a JPEG
    Apply(commands::apply::ApplyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Filters(args) => commands::filters::run(args),
        Commands::Apply(args) => commands::apply::run(args),
    }
}
