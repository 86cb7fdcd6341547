//! The application-state snapshot.
//!
//! [`AppState`] is a plain value: reducers take it by value and hand back a
//! new one, and the store publishes each result behind an `Arc` that is
//! never written through.

mod flag;
mod location;
pub mod persist;
mod types;

use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;
use crate::ui::render::pad_line;
use crate::ui::system_menu::menu_titles;

pub use flag::TaskFlag;
pub use location::Location;
pub use persist::{PersistError, StateFile};
pub use types::{Book, Dimensions, GoToPageEntry, HardwareState, Listing};

/// Width the system menu is rendered at before the display reports its size.
const INITIAL_MENU_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub location: Location,
    pub library: Listing,
    /// Index into `books` of the open book.
    pub book: usize,
    pub books: Vec<Book>,
    pub system_menu: Listing,
    pub go_to_page: GoToPageEntry,
    pub replacing_library: TaskFlag,
    pub backing_up_log: TaskFlag,
    pub update_ui: bool,
    pub shutting_down: bool,
    pub dimensions: Dimensions,
    pub home_menu_visible: bool,
    #[serde(default)]
    pub hardware: HardwareState,
}

impl UiState for AppState {}

impl Default for AppState {
    fn default() -> Self {
        Self {
            location: Location::Book,
            library: Listing::default(),
            book: 0,
            books: Vec::new(),
            system_menu: Listing {
                data: menu_titles()
                    .map(|title| pad_line(INITIAL_MENU_WIDTH, title))
                    .collect(),
                page: 0,
            },
            go_to_page: GoToPageEntry::default(),
            replacing_library: TaskFlag::Idle,
            backing_up_log: TaskFlag::Idle,
            update_ui: false,
            shutting_down: false,
            dimensions: Dimensions::default(),
            home_menu_visible: false,
            hardware: HardwareState::default(),
        }
    }
}

impl AppState {
    /// The book currently open, if the library has any.
    pub fn open_book(&self) -> Option<&Book> {
        self.books.get(self.book)
    }
}
