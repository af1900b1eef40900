//! Command-line interface for artist-stats.
//!
//! Runs the collectors and a few one-off helpers for poking at the Genius
//! API and the local setup.

mod commands;

pub use commands::{Cli, Commands, run_command};
