//! The book library: listing, opening and keeping the book list in sync.

mod intent;
mod reducer;

pub use intent::LibraryIntent;
pub use reducer::{sort_books, LibraryReducer};
