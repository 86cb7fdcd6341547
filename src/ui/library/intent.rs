use crate::state::{Book, TaskFlag};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryIntent {
    /// Open the nth book listed on the current library page.
    GoToBook(usize),
    /// Replace the whole book list.
    SetBooks(Vec<Book>),
    /// Merge books in; filenames already present are skipped.
    AddBooks(Vec<Book>),
    /// Drop books by filename.
    RemoveBooks(Vec<String>),
    ReplaceLibrary(TaskFlag),
}

impl Intent for LibraryIntent {}
