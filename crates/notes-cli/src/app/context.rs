//! Application context for the notes CLI.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;

use notes_core::{Notes, SecureStore};

use crate::cli::Cli;
use crate::ui::UiContext;

use super::password::{open_store_with_retry, TerminalPassword};
use super::resolver::resolve_store_path;

/// Application context that bundles CLI args with the lazily resolved store path.
pub struct AppContext<'a> {
    cli: &'a Cli,
    store_path: OnceCell<PathBuf>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            store_path: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn ui(&self) -> UiContext {
        UiContext::from_env(self.cli.no_color)
    }

    /// Get the store path, resolving it lazily from args, config, or defaults.
    pub fn store_path(&self) -> anyhow::Result<&Path> {
        self.store_path
            .get_or_try_init(|| resolve_store_path(self.cli))
            .map(PathBuf::as_path)
    }

    /// Lock and load the store, with password handling and retry logic.
    pub fn open_store(&self) -> anyhow::Result<(SecureStore<TerminalPassword>, Notes)> {
        let path = self.store_path()?;
        tracing::debug!(path = %path.display(), "opening store");
        open_store_with_retry(path)
    }
}
