//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use canute_ui::actions::ActionRegistry;
use canute_ui::state::{AppState, Book, Dimensions, Location};
use canute_ui::store::{Store, StoreHandle, StoreLayer};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A book whose file name is derived from its title.
pub fn book(title: &str, lines: usize) -> Book {
    Book::new(format!("/books/{}.canute", title), title, lines)
}

/// The default 40x9 display with `books` loaded via the library reducer.
pub fn state_with_books(books: Vec<Book>) -> AppState {
    use canute_ui::ui::library::{LibraryIntent, LibraryReducer};
    use canute_ui::ui::mvi::Reducer;

    let state = AppState {
        dimensions: Dimensions::new(40, 9),
        ..AppState::default()
    };
    LibraryReducer::reduce(state, LibraryIntent::SetBooks(books))
}

/// A state showing an open book at `page`.
pub fn reading(lines: usize, page: usize) -> AppState {
    let mut state = state_with_books(vec![book("only", lines).with_page(page)]);
    state.location = Location::Book;
    state
}

/// Spawn a store over `initial` and return its handle.
pub fn spawn_store(initial: AppState) -> StoreHandle {
    let registry = ActionRegistry::standard().expect("standard registry");
    let (handle, server) = StoreLayer::new(Store::new(initial, registry));
    tokio::spawn(server.run());
    handle
}

/// Write a native book file of `lines` rows of `width` cells.
pub fn write_book(dir: &Path, name: &str, width: usize, lines: usize) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, vec![0u8; width * lines]).expect("Failed to write book");
    path
}

pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}
