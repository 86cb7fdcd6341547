//! Completion tracking for display warm-up and reset.
//!
//! The driver does the actual work; these reducers only record where the
//! operation stands.

mod intent;
mod reducer;

pub use intent::HardwareIntent;
pub use reducer::HardwareReducer;
