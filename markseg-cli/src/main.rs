//! markseg command-line entry point

use clap::Parser;
use markseg_cli::commands::Commands;
use markseg_cli::CliResult;

/// Segment marked-up documents into plain and flagged passages
#[derive(Debug, Parser)]
#[command(name = "markseg", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
