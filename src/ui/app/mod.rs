//! Global navigation, paging and app-wide flags.

mod intent;
mod reducer;

pub use intent::AppIntent;
pub use reducer::AppReducer;
