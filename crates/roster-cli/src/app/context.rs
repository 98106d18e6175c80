//! Application context for the Roster CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::debug;

use roster_core::{FileStorage, RecordStore};

use crate::cli::Cli;
use crate::config::{read_config, RosterConfig};
use crate::helpers::OutputFormat;
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_data_dir};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<RosterConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, loaded on first use. A missing file yields defaults.
    pub fn config(&self) -> anyhow::Result<&RosterConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if !path.exists() {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(RosterConfig::default());
            }
            debug!(path = %path.display(), "loading config");
            read_config(&path)
        })
    }

    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_data_dir(self.cli.data_dir.as_deref(), self.config()?)
    }

    pub fn slot(&self) -> anyhow::Result<&str> {
        Ok(self.config()?.storage.slot.as_str())
    }

    /// Open the record store in the resolved data directory.
    pub fn open_store(&self) -> anyhow::Result<RecordStore<FileStorage>> {
        let dir = self.data_dir()?;
        let slot = self.slot()?;
        debug!(dir = %dir.display(), slot, "opening record store");
        Ok(RecordStore::with_slot(FileStorage::new(dir), slot))
    }

    /// UI context for the current command.
    ///
    /// Falls back to the config's `ascii` setting when `--ascii` is absent;
    /// an unreadable config does not block rendering.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        let ascii = self.cli.ascii
            || self
                .config()
                .map(|config| config.ui.ascii)
                .unwrap_or(false);
        UiContext::from_env(json, format, self.cli.no_color, ascii)
    }
}
