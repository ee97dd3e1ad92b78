//! Path resolution for config and store files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, read_config};
use crate::constants::CONFIG_ENV;

/// Resolve the config file path, checking NOTES_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the store file path from CLI args, config, or the default location.
pub fn resolve_store_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let config_path = resolve_config_path()?;
    if config_path.exists() {
        let config = read_config(&config_path)?;
        if let Some(path) = config.store.path {
            tracing::debug!(config = %config_path.display(), "store path from config");
            return Ok(PathBuf::from(path));
        }
    }

    default_store_path()
}

/// Error message when the store file is missing.
pub fn missing_store_message(path: &Path) -> String {
    format!(
        "No store found at {}\n\nRun:\n  notes add\n\nOr specify a store path:\n  NOTES_PATH=/path/to/notes.dat notes list",
        path.display()
    )
}
