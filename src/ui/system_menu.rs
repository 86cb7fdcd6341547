//! System menu entries and the buttons they sit on.

use crate::actions::{self, Action};
use crate::state::TaskFlag;

/// Button of the first menu entry; the row above it is the menu header.
pub const FIRST_MENU_BUTTON: usize = 2;

/// A selectable line of the system menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub title: &'static str,
    pub action: Action,
}

/// Menu entries in display order.
pub fn menu_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            title: "shutdown",
            action: actions::shutdown(),
        },
        MenuEntry {
            title: "backup log to USB stick",
            action: actions::backup_log(TaskFlag::InProgress),
        },
        MenuEntry {
            title: "replace library from USB stick",
            action: actions::replace_library(TaskFlag::InProgress),
        },
        MenuEntry {
            title: "warm up display",
            action: actions::warm_up(TaskFlag::InProgress),
        },
    ]
}

pub fn menu_titles() -> impl Iterator<Item = &'static str> {
    menu_entries().into_iter().map(|entry| entry.title)
}

/// Entries paired with the id of the button that selects them.
pub fn menu_buttons() -> impl Iterator<Item = (String, Action)> {
    menu_entries()
        .into_iter()
        .enumerate()
        .map(|(i, entry)| ((i + FIRST_MENU_BUTTON).to_string(), entry.action))
}
