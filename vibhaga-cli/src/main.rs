//! Command-line entry point for vibhaga

use anyhow::Result;
use clap::Parser;

use vibhaga_cli::commands::Commands;

/// Morphological analysis for agglutinative languages
#[derive(Debug, Parser)]
#[command(name = "vibhaga", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => args.execute(),
        Commands::Serve(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
    }
}
