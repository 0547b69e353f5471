//! RtiRender CLI - Command-line interface for relighting PTM and HSH files

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "rtirender")]
#[command(about = "RtiRender: relight PTM and HSH reflectance images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the RtiRender CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
