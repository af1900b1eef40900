//! Access token loading.
//!
//! Tokens live in a small `KEY=VALUE` file (`env-1.env` by default):
//!
//! ```text
//! # Genius client access token
//! ACCESS_TOKEN=abc123
//! ```
//!
//! Blank lines and `#` comments are ignored, lines without `=` are skipped,
//! keys and values are trimmed and one pair of matching quotes around the
//! value is removed. A later key overwrites an earlier one.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result, ResultExt};
use crate::genius::GeniusError;

/// Key the token is stored under
pub const ACCESS_TOKEN_KEY: &str = "ACCESS_TOKEN";

/// Parse an env file into its key/value pairs.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<HashMap<String, String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::not_found(path));
    }
    let contents = std::fs::read_to_string(path)
        .with_context(format!("reading env file {}", path.display()))?;
    Ok(parse_env(&contents))
}

/// Parse env-file text into key/value pairs.
pub fn parse_env(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), unquote(value.trim()).to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Where a worker gets its access token from.
///
/// Cloned into every parallel worker, which resolves it on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// Token given directly (CLI flag or `ACCESS_TOKEN` env var)
    Explicit(String),
    /// Token read from a `KEY=VALUE` file
    EnvFile(PathBuf),
}

impl TokenSource {
    /// Prefer an explicit token, fall back to the env file.
    pub fn pick(explicit: Option<&str>, env_file: impl Into<PathBuf>) -> Self {
        match explicit.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => Self::Explicit(token.to_string()),
            None => Self::EnvFile(env_file.into()),
        }
    }

    /// Load the token. A file without `ACCESS_TOKEN` is a `MissingToken` error.
    pub fn resolve(&self) -> Result<String> {
        match self {
            Self::Explicit(token) => Ok(token.clone()),
            Self::EnvFile(path) => {
                let vars = load_env_file(path)?;
                vars.get(ACCESS_TOKEN_KEY)
                    .filter(|t| !t.is_empty())
                    .cloned()
                    .ok_or(Error::Genius(GeniusError::MissingToken))
            }
        }
    }

    /// Short description for logs, never the token itself.
    pub fn describe(&self) -> String {
        match self {
            Self::Explicit(_) => "explicit token".to_string(),
            Self::EnvFile(path) => format!("env file {}", path.display()),
        }
    }
}

/// Show only the start of a token.
pub fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(10).collect();
    format!("{}...", prefix)
}
