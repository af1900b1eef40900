//! Parallel collector: chunked fan-out over a bounded worker pool.
//!
//! Each batch runs as its own tokio task and builds its own client from the
//! token source. At most `workers` batches are in flight. Results are merged
//! in completion order, so only the order within a batch is preserved.

use std::future::Future;
use std::time::Instant;

use chrono::Local;
use futures::{StreamExt, stream};

use super::batch::{batch_size, chunk_list, worker_count};
use super::output::{self, PARALLEL_PREFIX};
use super::{CollectOptions, CollectReport, CollectionSummary, load_input};
use crate::credentials::TokenSource;
use crate::error::{Result, ResultExt};
use crate::genius::{ArtistRecord, Genius, GeniusSettings, LookupOutcome};

/// Pool sizing. `None` means "derive from the list size and the limits".
#[derive(Debug, Clone)]
pub struct ParallelOptions {
    pub workers: Option<usize>,
    pub batch_size: Option<usize>,
    pub max_workers: usize,
    pub min_batch_size: usize,
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self {
            workers: None,
            batch_size: None,
            max_workers: 4,
            min_batch_size: 5,
        }
    }
}

impl ParallelOptions {
    /// Concrete pool layout for a list of `artists` names
    pub fn plan(&self, artists: usize) -> PoolPlan {
        let workers = self
            .workers
            .filter(|w| *w > 0)
            .unwrap_or_else(|| worker_count(self.max_workers));
        let size = self
            .batch_size
            .filter(|b| *b > 0)
            .unwrap_or_else(|| batch_size(artists, workers, self.min_batch_size));

        PoolPlan {
            workers,
            batch_size: size,
            batches: artists.div_ceil(size),
            dropped_batches: 0,
        }
    }
}

/// How a parallel run was laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolPlan {
    pub workers: usize,
    pub batch_size: usize,
    pub batches: usize,
    /// Batches whose worker died; their rows are missing from the output
    pub dropped_batches: usize,
}

/// Reported after every finished batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchProgress {
    pub completed: usize,
    pub total: usize,
    /// Rows collected so far
    pub rows: usize,
}

impl BatchProgress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }
}

/// Look up every artist across a worker pool and write the CSV.
///
/// The token source is checked once up front so a bad token fails the run
/// before any work is dispatched. `on_progress` is called as batches finish.
pub async fn run_parallel(
    options: &CollectOptions,
    parallel: &ParallelOptions,
    on_progress: impl FnMut(&BatchProgress),
) -> Result<CollectReport> {
    let artists = load_input(&options.artists_file)?;

    Genius::from_source(&options.token, options.settings.clone()).with_context(format!(
        "initializing Genius client from {}",
        options.token.describe()
    ))?;
    tracing::info!("Genius API client test successful");

    let mut plan = parallel.plan(artists.len());
    let batches = chunk_list(&artists, plan.batch_size);
    tracing::info!(
        workers = plan.workers,
        batch_size = plan.batch_size,
        batches = batches.len(),
        "Dispatching batches"
    );

    let started = Instant::now();
    let token = options.token.clone();
    let settings = options.settings.clone();
    let (records, dropped) = fan_out(
        batches,
        plan.workers,
        move |batch| process_batch(batch, token.clone(), settings.clone()),
        on_progress,
    )
    .await;
    plan.dropped_batches = dropped;

    let path = output::timestamped_path(&options.output_dir, PARALLEL_PREFIX, Local::now());
    let written = output::save_to_csv(&records, &path)?;

    let summary = CollectionSummary::from_records(artists.len(), &records, started.elapsed());
    tracing::info!(
        successful = summary.successful,
        no_match = summary.no_match,
        errors = summary.errors,
        dropped_batches = dropped,
        "Parallel collection complete"
    );

    Ok(CollectReport {
        records,
        summary,
        output: written.then_some(path),
        plan: Some(plan),
    })
}

/// One worker: authenticate, then look up the batch in order.
///
/// If the client can't be built, every name in the batch gets an "N/A" row
/// marked as failed.
async fn process_batch(
    batch: Vec<String>,
    token: TokenSource,
    settings: GeniusSettings,
) -> Vec<ArtistRecord> {
    match Genius::from_source(&token, settings) {
        Ok(genius) => genius.get_artists(&batch).await,
        Err(e) => {
            tracing::error!(error = %e, size = batch.len(), "Error in worker");
            let reason = e.to_string();
            batch
                .into_iter()
                .map(|term| ArtistRecord::unresolved(term, LookupOutcome::Failed(reason.clone())))
                .collect()
        }
    }
}

/// Run `worker` over every batch with at most `workers` in flight.
///
/// Returns the merged rows and the number of batches whose task died.
async fn fan_out<F, Fut>(
    batches: Vec<Vec<String>>,
    workers: usize,
    worker: F,
    mut on_progress: impl FnMut(&BatchProgress),
) -> (Vec<ArtistRecord>, usize)
where
    F: Fn(Vec<String>) -> Fut,
    Fut: Future<Output = Vec<ArtistRecord>> + Send + 'static,
{
    let total = batches.len();
    let mut finished = stream::iter(batches)
        .map(|batch| tokio::spawn(worker(batch)))
        .buffer_unordered(workers.max(1));

    let mut records = Vec::new();
    let mut completed = 0;
    let mut dropped = 0;

    while let Some(joined) = finished.next().await {
        match joined {
            Ok(batch_records) => {
                records.extend(batch_records);
                completed += 1;
                on_progress(&BatchProgress {
                    completed,
                    total,
                    rows: records.len(),
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "Batch failed");
                dropped += 1;
            }
        }
    }

    (records, dropped)
}
