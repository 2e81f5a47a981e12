//! Config file loading

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;

/// Load configuration for a run.
///
/// When `config_path` is provided, parse failures are hard errors. An
/// auto-discovered config that fails to parse soft-fails to defaults with a
/// warning, so a stray file never blocks a merge.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(root),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    match parse_toml_config(&content, &config_file) {
        Ok(config) => Ok(config),
        Err(e) => {
            if config_path_provided {
                return Err(e);
            }
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

/// Parse TOML config, supporting a nested [csv-merge] section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("csv-merge") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val
        .try_into()
        .with_context(|| format!("Invalid config: {}", config_file.display()))
}

fn discover_config(root: &Path) -> Option<PathBuf> {
    let candidates = ["csv-merge.toml", ".csv-merge.toml"];

    for candidate in candidates {
        let path = root.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}
