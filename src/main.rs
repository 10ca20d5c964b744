//! Roster Tune entry point
//!
//! Reads a character roster, boosts every HP stat at or below the threshold,
//! and writes the adjusted roster to a new file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use roster_tune::consts::{DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "roster-tune", version, about = "Boost low HP stats in a character roster")]
struct Cli {
    /// Roster file to read
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// File the adjusted roster is written to
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let report = roster_tune::adjust_hp(&cli.input, &cli.output)?;
    log::info!(
        "Boosted {} of {} characters",
        report.boosted,
        report.total
    );
    println!("Updated characters saved to {}", cli.output.display());

    Ok(())
}
