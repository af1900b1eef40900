//! Artist Stats - collect Genius artist statistics into CSV files.
//!
//! Reads a list of artist names, resolves each one through the Genius search
//! API and records the artist's name, ID and follower count. Lookups can run
//! one after another or fanned out over a pool of workers.

pub mod cli;
pub mod collect;
pub mod config;
pub mod credentials;
pub mod error;
pub mod genius;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging; stdout is left to the command output
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("artist_stats=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run_command(&args)
}
