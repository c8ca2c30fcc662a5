//! Application context for the Photo Archive CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use photoarchive_core::FlatFileStorage;

use crate::cli::Cli;
use crate::config::{read_config, ArchiveConfig};
use crate::ui::{DisplayFlags, UiContext};

use super::resolver::{resolve_archive_path, resolve_config_path};

/// Application context that bundles CLI args with the config file.
///
/// The config is read at most once and only by commands that need it.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<ArchiveConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading them lazily.
    ///
    /// Returns `None` when no config file exists.
    pub fn config(&self) -> anyhow::Result<Option<&ArchiveConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = match resolve_config_path() {
                Ok(path) => path,
                Err(err) => {
                    tracing::debug!(error = %err, "no config path available");
                    return Ok::<_, anyhow::Error>(None);
                }
            };
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file");
                return Ok(None);
            }
            tracing::debug!(path = %path.display(), "reading config");
            read_config(&path).map(Some)
        })?;
        Ok(config.as_ref())
    }

    /// Resolve the archive file path from flags, config, or the default.
    pub fn archive_path(&self) -> anyhow::Result<PathBuf> {
        let path = resolve_archive_path(self.cli, self.config()?);
        tracing::debug!(path = %path.display(), "resolved archive path");
        Ok(path)
    }

    /// Storage backend for the resolved archive file.
    pub fn storage(&self) -> anyhow::Result<FlatFileStorage> {
        Ok(FlatFileStorage::new(self.archive_path()?))
    }

    /// Build the UI context for a command.
    ///
    /// A config file that fails to load falls back to default UI settings
    /// here; commands that need the config report the error themselves.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        let flags = DisplayFlags {
            no_color: self.cli.no_color,
            ascii: self.cli.ascii,
        };
        let settings = self.config().ok().flatten().map(|c| &c.ui);
        UiContext::from_env(json, format, flags, settings)
    }
}
