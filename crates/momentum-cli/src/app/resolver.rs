//! Path resolution for the config file.

use std::path::PathBuf;

use crate::config::default_config_path;

/// Where the config lives: `MOMENTUM_CONFIG` when set and non-blank,
/// the XDG location otherwise.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    match std::env::var("MOMENTUM_CONFIG") {
        Ok(value) if !value.trim().is_empty() => Ok(PathBuf::from(value)),
        _ => default_config_path(),
    }
}
