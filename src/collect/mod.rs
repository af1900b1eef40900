//! Artist statistics collection.
//!
//! Reads a list of artist names, looks each one up on Genius and writes the
//! results to a timestamped CSV. Two drivers share the same input, output
//! and summary code:
//! - `sequential`: one client, one pass over the list
//! - `parallel`: the list is chunked and fanned out over a bounded pool of
//!   workers, each with its own client

mod batch;
mod input;
mod output;
mod parallel;
mod sequential;
mod summary;

use std::path::{Path, PathBuf};

pub use batch::{batch_size, chunk_list, worker_count};
pub use input::{load_artists_from_file, parse_artist_list};
pub use output::{PARALLEL_PREFIX, SEQUENTIAL_PREFIX, save_to_csv, timestamped_path, write_csv};
pub use parallel::{BatchProgress, ParallelOptions, PoolPlan, run_parallel};
pub use sequential::run_sequential;
pub use summary::CollectionSummary;

use crate::credentials::TokenSource;
use crate::error::{Error, Result};
use crate::genius::{ArtistRecord, GeniusSettings};

/// Inputs shared by both drivers
#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub artists_file: PathBuf,
    pub token: TokenSource,
    pub output_dir: PathBuf,
    pub settings: GeniusSettings,
}

/// What a collection run produced
#[derive(Debug)]
pub struct CollectReport {
    pub records: Vec<ArtistRecord>,
    pub summary: CollectionSummary,
    /// CSV path, `None` when there was nothing to write
    pub output: Option<PathBuf>,
    /// Pool layout, parallel runs only
    pub plan: Option<PoolPlan>,
}

/// Load the artist list, treating an empty list as an error.
fn load_input(path: &Path) -> Result<Vec<String>> {
    let artists = load_artists_from_file(path)?;
    if artists.is_empty() {
        return Err(Error::EmptyInput(path.to_path_buf()));
    }
    tracing::info!(count = artists.len(), "Loaded artists from {}", path.display());
    Ok(artists)
}
