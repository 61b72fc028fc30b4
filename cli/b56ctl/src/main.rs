//! b56ctl (b56) - CLI for base-56 short IDs
//!
//! Encodes and decodes values from the command line and verifies round-trips
//! over a range with optional throughput reporting.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    logging::init(&config, cli.verbosity());

    if let Err(e) = cli.run() {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
