//! RANGELAB CLI - Command-line interface for the range visibility core
//!
//! Usage:
//!   rangelab validate <topology.json>                    - Validate a topology document
//!   rangelab inspect <topology.json> --role <role>       - Show a role's filtered view
//!       [--assets <assets.json>] [--stats]

use clap::{Parser, Subcommand};
use cli::commands::{InspectCommand, ValidateCommand};

#[derive(Parser)]
#[command(name = "rangelab")]
#[command(about = "RANGELAB - Team-scoped topology and asset-visibility engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a topology document
    Validate(ValidateCommand),
    /// Show the view of a topology one team role may observe
    Inspect(InspectCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(cmd) => cmd.run(),
        Commands::Inspect(cmd) => cmd.run(),
    }
}
