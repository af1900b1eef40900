//! Env file and config file checks.

use std::path::Path;

use crate::config::{self, Config};
use crate::credentials::{ACCESS_TOKEN_KEY, load_env_file, mask_token};

/// Show which keys an env file defines and whether the token is there
pub fn cmd_check_env(path: &Path) -> anyhow::Result<()> {
    println!("Env file: {}", path.display());

    let vars = match load_env_file(path) {
        Ok(vars) => vars,
        Err(e) => {
            eprintln!("✗ {}", e);
            return Err(e.into());
        }
    };

    let mut keys: Vec<&str> = vars.keys().map(String::as_str).collect();
    keys.sort_unstable();
    if keys.is_empty() {
        println!("Keys: (none)");
    } else {
        println!("Keys: {}", keys.join(", "));
    }

    match vars.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty()) {
        Some(token) => {
            println!("✓ {} found: {}", ACCESS_TOKEN_KEY, mask_token(token));
            Ok(())
        }
        None => {
            eprintln!("✗ {} not found", ACCESS_TOKEN_KEY);
            anyhow::bail!("{} missing from {}", ACCESS_TOKEN_KEY, path.display())
        }
    }
}

/// Print the config location and effective values, optionally writing
/// the defaults out first
pub fn cmd_config(config: &Config, path_override: Option<&Path>, init: bool) -> anyhow::Result<()> {
    let path = match path_override {
        Some(path) => path.to_path_buf(),
        None => config::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?,
    };

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            config::save_to(&Config::default(), &path)?;
            println!("✓ Wrote default config to {}", path.display());
        }
    }

    println!("Config file: {}", path.display());
    if !path.exists() {
        println!("(not present, using defaults)");
    }
    println!();
    print!("{}", config::to_toml(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_temp_file;
    use tempfile::TempDir;

    #[test]
    fn test_check_env_accepts_token() {
        let env = write_temp_file("ACCESS_TOKEN=abcdefghijklmnop\n");
        assert!(cmd_check_env(env.path()).is_ok());
    }

    #[test]
    fn test_check_env_rejects_missing_token() {
        let env = write_temp_file("OTHER=1\n");
        assert!(cmd_check_env(env.path()).is_err());
    }

    #[test]
    fn test_check_env_missing_file() {
        assert!(cmd_check_env(Path::new("/no/such/env-1.env")).is_err());
    }

    #[test]
    fn test_config_init_writes_defaults_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        cmd_config(&Config::default(), Some(&path), true).unwrap();
        assert_eq!(config::load_from(&path), Config::default());

        std::fs::write(&path, "[collect]\nmax_workers = 2\n").unwrap();
        cmd_config(&Config::default(), Some(&path), true).unwrap();
        assert_eq!(config::load_from(&path).collect.max_workers, 2);
    }
}
