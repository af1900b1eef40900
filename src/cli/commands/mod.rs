//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `collect`: sequential and parallel collection runs
//! - `lookup`: single artist lookups and raw searches
//! - `setup`: env file and config file checks

mod collect;
mod lookup;
mod setup;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

pub use collect::cmd_collect;
pub use lookup::{cmd_artist, cmd_search};
pub use setup::{cmd_check_env, cmd_config};

use crate::config::{self, Config};
use crate::credentials::TokenSource;

/// Artist Stats CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to get the access token from
#[derive(Args, Debug, Clone, Default)]
pub struct TokenArgs {
    /// Env file holding ACCESS_TOKEN (default from config)
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Access token, takes precedence over the env file
    #[arg(long, env = "ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl TokenArgs {
    pub fn source(&self, config: &Config) -> TokenSource {
        let env_file = self
            .env_file
            .clone()
            .unwrap_or_else(|| config.collect.env_file.clone());
        TokenSource::pick(self.token.as_deref(), env_file)
    }
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Look up every artist in a list and write a timestamped CSV
    Collect {
        /// Fan the list out over a pool of workers
        #[arg(long)]
        parallel: bool,
        /// Newline-delimited artist names (default from config)
        #[arg(long)]
        artists_file: Option<PathBuf>,
        #[command(flatten)]
        auth: TokenArgs,
        /// Directory for the CSV (default from config)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Number of workers (parallel only)
        #[arg(long)]
        workers: Option<usize>,
        /// Names per batch (parallel only)
        #[arg(long)]
        batch_size: Option<usize>,
    },
    /// Look up a single artist
    Artist {
        /// Search term, usually the artist name
        term: String,
        #[command(flatten)]
        auth: TokenArgs,
    },
    /// Run a raw search and list the hits
    Search {
        query: String,
        /// Hits to request (default from config)
        #[arg(long)]
        per_page: Option<u32>,
        #[command(flatten)]
        auth: TokenArgs,
    },
    /// Check that an env file provides ACCESS_TOKEN
    CheckEnv {
        /// Env file to inspect (default from config)
        #[arg(long)]
        env_file: Option<PathBuf>,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Run the parsed command
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };

    match &cli.command {
        Commands::Collect {
            parallel,
            artists_file,
            auth,
            output_dir,
            workers,
            batch_size,
        } => {
            let rt = Runtime::new()?;
            let options = collect::collect_options(
                &config,
                artists_file.as_ref(),
                auth,
                output_dir.as_ref(),
            );
            if *parallel {
                let pool = collect::parallel_options(&config, *workers, *batch_size);
                cmd_collect(&rt, &options, Some(&pool))
            } else {
                cmd_collect(&rt, &options, None)
            }
        }
        Commands::Artist { term, auth } => {
            let rt = Runtime::new()?;
            cmd_artist(&rt, &config, term, &auth.source(&config))
        }
        Commands::Search {
            query,
            per_page,
            auth,
        } => {
            let rt = Runtime::new()?;
            let per_page = per_page.unwrap_or(config.genius.per_page);
            cmd_search(&rt, &config, query, per_page, &auth.source(&config))
        }
        Commands::CheckEnv { env_file } => {
            let path = env_file
                .clone()
                .unwrap_or_else(|| config.collect.env_file.clone());
            cmd_check_env(&path)
        }
        Commands::Config { init } => cmd_config(&config, cli.config.as_deref(), *init),
    }
}
