//! Sequential collector: one client, one pass.

use std::time::Instant;

use chrono::Local;

use super::output::{self, SEQUENTIAL_PREFIX};
use super::{CollectOptions, CollectReport, CollectionSummary, load_input};
use crate::error::{Result, ResultExt};
use crate::genius::Genius;

/// Look up every artist in the list in order and write the CSV.
///
/// Fails early if the list is missing or empty, or if no access token can be
/// loaded. Per-artist failures only show up as "N/A" rows.
pub async fn run_sequential(options: &CollectOptions) -> Result<CollectReport> {
    let artists = load_input(&options.artists_file)?;

    let genius = Genius::from_source(&options.token, options.settings.clone())
        .with_context(format!(
            "initializing Genius client from {}",
            options.token.describe()
        ))?;
    tracing::info!("Genius API client initialized");

    let started = Instant::now();
    let records = genius.get_artists(&artists).await;

    let path = output::timestamped_path(&options.output_dir, SEQUENTIAL_PREFIX, Local::now());
    let written = output::save_to_csv(&records, &path)?;

    let summary = CollectionSummary::from_records(artists.len(), &records, started.elapsed());
    tracing::info!(
        successful = summary.successful,
        no_match = summary.no_match,
        errors = summary.errors,
        "Collection complete"
    );

    Ok(CollectReport {
        records,
        summary,
        output: written.then_some(path),
        plan: None,
    })
}
