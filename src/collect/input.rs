//! Artist list loading.

use std::path::Path;

use crate::error::{Error, Result, ResultExt};

/// Read artist names from a newline-delimited file.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
pub fn load_artists_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::not_found(path));
    }
    let contents = std::fs::read_to_string(path)
        .with_context(format!("reading artist list {}", path.display()))?;
    Ok(parse_artist_list(&contents))
}

pub fn parse_artist_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
