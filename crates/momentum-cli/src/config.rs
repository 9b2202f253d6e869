use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::STORE_FILE_NAME;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MomentumConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default)]
    pub ascii: bool,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(STORE_FILE_NAME))
}

/// Read the config file, treating a missing file as all defaults.
pub fn load_config(path: &Path) -> anyhow::Result<MomentumConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(MomentumConfig::default())
        }
        Err(err) => {
            return Err(anyhow::anyhow!(
                "Failed to read config {}: {}",
                path.display(),
                err
            ))
        }
    };
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    base_dir("XDG_CONFIG_HOME", &[".config"])
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    base_dir("XDG_DATA_HOME", &[".local", "share"])
}

/// XDG base-dir lookup, treating a blank variable as unset.
fn base_dir(env_var: &str, home_fallback: &[&str]) -> anyhow::Result<PathBuf> {
    match std::env::var(env_var) {
        Ok(value) if !value.trim().is_empty() => Ok(PathBuf::from(value).join("momentum")),
        _ => {
            let mut dir = home_dir()?;
            for part in home_fallback {
                dir.push(part);
            }
            dir.push("momentum");
            Ok(dir)
        }
    }
}

fn home_dir() -> anyhow::Result<PathBuf> {
    std::env::var("HOME")
        .map(PathBuf::from)
        .map_err(|_| anyhow::anyhow!("HOME is unset; cannot locate config or data directories"))
}
