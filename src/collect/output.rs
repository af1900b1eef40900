//! CSV output.
//!
//! Columns are `search_term,artist_name,artist_id,followers_count`; lookup
//! fields a row doesn't have are written as `N/A`.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{Result, ResultExt};
use crate::genius::ArtistRecord;

/// Output file prefix for the sequential collector
pub const SEQUENTIAL_PREFIX: &str = "artist_data";

/// Output file prefix for the parallel collector
pub const PARALLEL_PREFIX: &str = "artist_data_multiprocessing";

/// `<dir>/<prefix>_<YYYYmmdd_HHMMSS>.csv`
pub fn timestamped_path(dir: &Path, prefix: &str, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("{}_{}.csv", prefix, now.format("%Y%m%d_%H%M%S")))
}

/// Serialize rows (with header) to any writer.
pub fn write_csv<W: Write>(writer: W, records: &[ArtistRecord]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush().with_context("flushing CSV output")?;
    Ok(())
}

/// Write rows to `path`. Returns `false` and writes nothing if there are
/// no rows.
pub fn save_to_csv(records: &[ArtistRecord], path: &Path) -> Result<bool> {
    if records.is_empty() {
        tracing::warn!("No data to save");
        return Ok(false);
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(format!("creating output directory {}", dir.display()))?;
    }

    let file = std::fs::File::create(path)
        .with_context(format!("creating {}", path.display()))?;
    write_csv(std::io::BufWriter::new(file), records)?;

    tracing::info!(rows = records.len(), "Data saved to {}", path.display());
    Ok(true)
}
