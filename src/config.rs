//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\artist-stats\config.toml
//! - macOS: ~/Library/Application Support/artist-stats/config.toml
//! - Linux: ~/.config/artist-stats/config.toml
//!
//! Every value has a default, so the file is optional. CLI flags override
//! whatever is loaded here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::genius::{DEFAULT_BASE_URL, DEFAULT_PER_PAGE, DEFAULT_TIMEOUT, GeniusSettings};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Genius API settings
    pub genius: GeniusConfig,

    /// Collection run settings
    pub collect: CollectConfig,
}

/// Genius API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeniusConfig {
    /// API root
    pub base_url: String,

    /// Per-request timeout in seconds, 0 falls back to the default
    pub timeout_secs: u64,

    /// Hits requested per search
    pub per_page: u32,

    /// Pause between lookups in a batch, in milliseconds
    pub request_delay_ms: u64,
}

impl Default for GeniusConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            per_page: DEFAULT_PER_PAGE,
            request_delay_ms: 100,
        }
    }
}

impl GeniusConfig {
    pub fn settings(&self) -> GeniusSettings {
        let timeout = match self.timeout_secs {
            0 => {
                tracing::warn!("timeout_secs = 0 would fail every request, using the default");
                DEFAULT_TIMEOUT
            }
            secs => Duration::from_secs(secs),
        };

        GeniusSettings {
            base_url: self.base_url.clone(),
            timeout,
            per_page: self.per_page,
            request_delay: Duration::from_millis(self.request_delay_ms),
        }
    }
}

/// Collection run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectConfig {
    /// Newline-delimited list of artist names
    pub artists_file: PathBuf,

    /// `KEY=VALUE` file holding `ACCESS_TOKEN`
    pub env_file: PathBuf,

    /// Where timestamped CSVs are written
    pub output_dir: PathBuf,

    /// Upper bound on parallel workers
    pub max_workers: usize,

    /// Smallest batch handed to a worker
    pub min_batch_size: usize,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            artists_file: PathBuf::from("artists_list.txt"),
            env_file: PathBuf::from("env-1.env"),
            output_dir: PathBuf::from("."),
            max_workers: 4,
            min_batch_size: 5,
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("artist-stats"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            tracing::warn!("Could not determine config directory, using defaults");
            Config::default()
        }
    }
}

/// Load configuration from a specific file, falling back to defaults.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to the default location
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to a specific file (write to temp, then rename)
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = to_toml(config)?;

    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

/// Serialize to pretty TOML
pub fn to_toml(config: &Config) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(ConfigError::Serialize)
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
