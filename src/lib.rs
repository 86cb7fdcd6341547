//! State-management core of a multi-line braille e-reader.
//!
//! A single immutable [`state::AppState`] snapshot is replaced only through
//! named [`actions::Action`]s routed to pure reducer groups under [`ui`].
//! The [`store`] serializes dispatch; [`ui::buttons`] turns hardware button
//! presses into actions.

pub mod actions;
pub mod config;
pub mod driver;
pub mod logging;
pub mod pagination;
pub mod runtime;
pub mod state;
pub mod store;
pub mod sync;
pub mod ui;
