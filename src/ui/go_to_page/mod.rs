//! Numeric page-jump entry.
//!
//! The reader types a 1-based page number one digit at a time; confirming
//! hands the number to the book group's `go_to_page`.

mod intent;
mod reducer;

pub use intent::GoToPageIntent;
pub use reducer::GoToPageReducer;
