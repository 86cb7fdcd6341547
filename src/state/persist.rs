//! Saving and restoring the snapshot across restarts.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::state::{AppState, GoToPageEntry, Location, TaskFlag};

/// Errors that can occur when writing the state file.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to write state file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize state: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// The on-disk copy of the snapshot.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved snapshot.
    ///
    /// A missing, unreadable or corrupt file yields `AppState::default()`;
    /// the failure is only logged.
    pub fn read(&self) -> AppState {
        tracing::debug!(path = %self.path.display(), "reading state file");
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!(error = %err, "state file unreadable, using initial state");
                return AppState::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(err) => {
                tracing::debug!(error = %err, "state file corrupt, using initial state");
                AppState::default()
            }
        }
    }

    /// Save `state` with its transient fields reset.
    ///
    /// Writes to a sibling temp file first and renames it over the target,
    /// so an interrupted write leaves the previous file intact.
    pub fn write(&self, state: &AppState) -> Result<(), PersistError> {
        tracing::debug!(path = %self.path.display(), "writing state file");
        let content = serde_json::to_string_pretty(&persistable(state))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.write_error(source))?;
        }
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, content).map_err(|source| self.write_error(source))?;
        fs::rename(&tmp_path, &self.path).map_err(|source| self.write_error(source))?;
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> PersistError {
        PersistError::WriteError {
            path: self.path.clone(),
            source,
        }
    }
}

/// The snapshot as it should be restored on next start: the open book
/// stays, every screen, entry and in-flight operation is reset.
pub fn persistable(state: &AppState) -> AppState {
    let mut saved = state.clone();
    saved.library.page = 0;
    saved.location = Location::Book;
    saved.home_menu_visible = false;
    saved.backing_up_log = TaskFlag::Idle;
    saved.replacing_library = TaskFlag::Idle;
    saved.go_to_page = GoToPageEntry::default();
    saved.hardware.resetting_display = TaskFlag::Idle;
    saved.hardware.warming_up = TaskFlag::Idle;
    saved.shutting_down = false;
    saved
}
