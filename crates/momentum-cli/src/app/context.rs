//! Application context for the Momentum CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use momentum_core::{JsonFileStore, LedgerStore};

use crate::cli::Cli;
use crate::config::{default_store_path, load_config, MomentumConfig};
use crate::ui::UiContext;

use super::resolver::resolve_config_path;

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple
/// parameters through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<MomentumConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&MomentumConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            load_config(&path)
        })
    }

    /// Resolve the store file path.
    ///
    /// Precedence: `--store` flag (which clap also fills from
    /// `MOMENTUM_STORE`), then the config file, then the data-dir
    /// default. The file itself is created lazily on first write.
    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = self.cli.store.clone() {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = self.config()?.store.path.clone() {
            return Ok(PathBuf::from(path));
        }
        default_store_path()
    }

    /// Open the ledger over the JSON-file store.
    pub fn open_ledger(&self) -> anyhow::Result<LedgerStore<JsonFileStore>> {
        let path = self.store_path()?;
        let store = JsonFileStore::open(&path)?;
        Ok(LedgerStore::new(store))
    }

    /// Build a UI context for a command's output flags.
    pub fn ui_context(&self, json_flag: bool) -> anyhow::Result<UiContext> {
        let ascii = self.cli.ascii || self.config()?.ui.ascii;
        Ok(UiContext::from_env(json_flag, self.cli.no_color, ascii))
    }
}
