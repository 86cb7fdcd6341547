//! Reading an open book: page jumps and the home menu.

mod intent;
mod reducer;

pub use intent::BookIntent;
pub use reducer::BookReducer;

pub(crate) use reducer::set_open_book_page;
