//! Path resolution for config and archive files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, ArchiveConfig};
use crate::constants::DEFAULT_ARCHIVE_FILE;

/// Resolve the config file path, checking PHOTOARCHIVE_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("PHOTOARCHIVE_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the archive file path.
///
/// Order: `--archive` / `PHOTOARCHIVE_PATH`, then `archive.path` from the
/// config, then `photo_archive.txt` in the current directory.
pub fn resolve_archive_path(cli: &Cli, config: Option<&ArchiveConfig>) -> PathBuf {
    if let Some(path) = cli.archive.as_deref().filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }

    if let Some(path) = config
        .and_then(|c| c.archive.path.as_deref())
        .filter(|p| !p.trim().is_empty())
    {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_ARCHIVE_FILE)
}
