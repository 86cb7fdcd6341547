//! Keeping the book list in step with the library directory.
//!
//! Only native `.canute` files become books. Other book formats found on a
//! USB stick are copied along by [`replace`] but are not converted.

mod book_file;

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::actions;
use crate::state::{AppState, Book};
use crate::store::{DispatchError, StoreHandle};

pub use book_file::book_from_file;

pub const NATIVE_EXTENSION: &str = "canute";

/// Extensions copied when replacing the library.
pub const BOOK_EXTENSIONS: &[&str] = &[NATIVE_EXTENSION, "pef", "brf"];

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Library I/O failed for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> SyncError + '_ {
    move |source| SyncError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Changes needed to make the book list match the files on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// On disk but not in the list.
    pub added: Vec<PathBuf>,
    /// In the list but gone from disk.
    pub removed: Vec<String>,
}

impl SyncPlan {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Diff `books` against `disk_files`.
pub fn plan(books: &[Book], disk_files: &[PathBuf]) -> SyncPlan {
    let known: HashSet<&str> = books.iter().map(|b| b.filename.as_str()).collect();
    let on_disk: HashSet<String> = disk_files
        .iter()
        .map(|f| f.to_string_lossy().into_owned())
        .collect();

    let added = disk_files
        .iter()
        .filter(|f| !known.contains(f.to_string_lossy().as_ref()))
        .cloned()
        .collect();
    let removed = books
        .iter()
        .filter(|b| !on_disk.contains(&b.filename))
        .map(|b| b.filename.clone())
        .collect();
    SyncPlan { added, removed }
}

/// Bring `state.books` in line with the native files in `library_dir`.
pub async fn sync(
    state: &AppState,
    library_dir: &Path,
    store: &StoreHandle,
) -> Result<SyncPlan, SyncError> {
    let disk_files = find_files(library_dir, &[NATIVE_EXTENSION]).await?;
    let plan = plan(&state.books, &disk_files);

    if !plan.added.is_empty() {
        let mut books = Vec::with_capacity(plan.added.len());
        for path in &plan.added {
            books.push(book_from_file(path, state.dimensions.width).await?);
        }
        tracing::info!(count = books.len(), "adding books");
        store.dispatch(actions::add_books(books)).await?;
    }
    if !plan.removed.is_empty() {
        tracing::info!(count = plan.removed.len(), "removing books");
        store
            .dispatch(actions::remove_books(plan.removed.clone()))
            .await?;
    }
    Ok(plan)
}

/// Delete every book file in `library_dir`.
pub async fn wipe(library_dir: &Path) -> Result<(), SyncError> {
    for book in find_files(library_dir, BOOK_EXTENSIONS).await? {
        tokio::fs::remove_file(&book)
            .await
            .map_err(io_error(&book))?;
    }
    Ok(())
}

/// Swap the library for the books on the USB stick, then sync.
pub async fn replace(
    library_dir: &Path,
    usb_dir: &Path,
    store: &StoreHandle,
) -> Result<SyncPlan, SyncError> {
    wipe(library_dir).await?;
    tokio::fs::create_dir_all(library_dir)
        .await
        .map_err(io_error(library_dir))?;

    for source in find_files(usb_dir, BOOK_EXTENSIONS).await? {
        let Some(name) = source.file_name() else {
            continue;
        };
        let target = library_dir.join(name);
        tracing::info!(from = %source.display(), to = %target.display(), "copying book");
        tokio::fs::copy(&source, &target)
            .await
            .map_err(io_error(&source))?;
    }

    let state = store.state().await?;
    sync(&state, library_dir, store).await
}

/// Files directly inside `dir` whose extension is one of `extensions`,
/// compared case-insensitively. Sorted by path.
pub async fn find_files(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, SyncError> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "directory does not exist");
            return Ok(Vec::new());
        }
        Err(e) => return Err(io_error(dir)(e)),
    };

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_error(dir))? {
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)));
        if matches && entry.file_type().await.map_err(io_error(dir))?.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
