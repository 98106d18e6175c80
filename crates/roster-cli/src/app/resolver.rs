//! Path resolution for the config file and data directory.

use std::path::PathBuf;

use crate::config::{default_config_path, default_data_dir, RosterConfig};

/// Resolve the config file path, checking `ROSTER_CONFIG` first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("ROSTER_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the data directory: flag or env, then config, then XDG default.
pub fn resolve_data_dir(flag: Option<&str>, config: &RosterConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = flag.filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = config
        .storage
        .data_dir
        .as_deref()
        .filter(|d| !d.trim().is_empty())
    {
        return Ok(PathBuf::from(dir));
    }
    default_data_dir()
}
