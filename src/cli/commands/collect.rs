//! Collection run commands.

use std::io::Write;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use super::TokenArgs;
use crate::collect::{
    self, BatchProgress, CollectOptions, CollectReport, CollectionSummary, ParallelOptions,
};
use crate::config::Config;

/// Merge CLI overrides into the configured defaults
pub fn collect_options(
    config: &Config,
    artists_file: Option<&PathBuf>,
    auth: &TokenArgs,
    output_dir: Option<&PathBuf>,
) -> CollectOptions {
    CollectOptions {
        artists_file: artists_file
            .cloned()
            .unwrap_or_else(|| config.collect.artists_file.clone()),
        token: auth.source(config),
        output_dir: output_dir
            .cloned()
            .unwrap_or_else(|| config.collect.output_dir.clone()),
        settings: config.genius.settings(),
    }
}

pub fn parallel_options(
    config: &Config,
    workers: Option<usize>,
    batch_size: Option<usize>,
) -> ParallelOptions {
    ParallelOptions {
        workers,
        batch_size,
        max_workers: config.collect.max_workers,
        min_batch_size: config.collect.min_batch_size,
    }
}

/// Run a collection, in parallel when `pool` is given
pub fn cmd_collect(
    rt: &Runtime,
    options: &CollectOptions,
    pool: Option<&ParallelOptions>,
) -> anyhow::Result<()> {
    println!("Reading artists from {:?}", options.artists_file);

    let report = rt.block_on(async {
        match pool {
            Some(pool) => collect::run_parallel(options, pool, print_progress).await,
            None => collect::run_sequential(options).await,
        }
    });

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            eprintln!("✗ Collection failed: {}", e);
            return Err(e.into());
        }
    };

    if pool.is_some() {
        // finish the progress line
        println!();
    }
    print_report(&report);
    Ok(())
}

fn print_progress(progress: &BatchProgress) {
    print!(
        "\rBatches {}/{} ({:.0}%), {} rows",
        progress.completed,
        progress.total,
        progress.percent(),
        progress.rows
    );
    std::io::stdout().flush().ok();
}

fn print_report(report: &CollectReport) {
    for line in report_lines(report) {
        println!("{}", line);
    }
}

/// Summary block printed after a run
fn report_lines(report: &CollectReport) -> Vec<String> {
    let summary = &report.summary;

    let mut lines = vec![
        String::new(),
        "Collection Summary".to_string(),
        "==================".to_string(),
        format!("Artists:       {}", summary.artists),
        format!("  ✓ Found:     {}", summary.successful),
        format!("  ✗ Failed:    {}", summary.failed()),
        format!("    ? No match:  {}", summary.no_match),
        format!("    ✗ Errors:    {}", summary.errors),
        format!("Success rate:  {:.1}%", summary.success_rate()),
        format!("Time:          {:.2}s", summary.duration.as_secs_f64()),
    ];

    if let Some(plan) = &report.plan {
        lines.extend(pool_stats(summary, plan.workers, plan.batch_size));
        if plan.dropped_batches > 0 {
            lines.push(format!(
                "  ✗ {} batch(es) failed, {} of {} rows missing",
                plan.dropped_batches,
                summary.artists.saturating_sub(summary.rows),
                summary.artists
            ));
        }
    }

    lines.push(String::new());
    match &report.output {
        Some(path) => lines.push(format!("Saved to {}", path.display())),
        None => lines.push("No data to save".to_string()),
    }

    let unresolved: Vec<_> = report.records.iter().filter(|r| !r.is_match()).collect();
    if !unresolved.is_empty() {
        lines.push(String::new());
        lines.push("Not resolved:".to_string());
        for record in unresolved.iter().take(10) {
            lines.push(format!("  {}", record.search_term));
        }
        if unresolved.len() > 10 {
            lines.push(format!("  ... and {} more", unresolved.len() - 10));
        }
    }

    lines
}

fn pool_stats(summary: &CollectionSummary, workers: usize, batch_size: usize) -> [String; 3] {
    [
        format!("Workers:       {} (batch size {})", workers, batch_size),
        format!("Speed:         {:.2} artists/s", summary.artists_per_second()),
        format!("Est. speedup:  {:.1}x", summary.estimated_speedup()),
    ]
}
