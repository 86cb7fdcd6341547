//! Reducer groups, input bindings and display text of the reader UI.

pub mod app;
pub mod book;
pub mod buttons;
pub mod go_to_page;
pub mod hardware;
pub mod library;
pub mod mvi;
pub mod render;
pub mod system_menu;
