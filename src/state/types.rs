use serde::{Deserialize, Serialize};

use crate::state::TaskFlag;

/// Display geometry in character cells and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 40,
            height: 9,
        }
    }
}

/// A book in the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Path of the native-format file; unique within the library.
    pub filename: String,
    pub title: String,
    /// Current page index.
    #[serde(default)]
    pub page: usize,
    /// Number of content lines in the book file.
    #[serde(default)]
    pub lines: usize,
}

impl Book {
    pub fn new(filename: impl Into<String>, title: impl Into<String>, lines: usize) -> Self {
        Self {
            filename: filename.into(),
            title: title.into(),
            page: 0,
            lines,
        }
    }

    /// A copy of this book open at `page`.
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

/// A paged list of pre-rendered text lines (library listing, system menu).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Listing {
    pub data: Vec<String>,
    pub page: usize,
}

/// Keystrokes typed so far on the go-to-page screen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoToPageEntry {
    /// Normalized page number being entered (1-based, no leading zeros).
    pub selection: String,
    /// Raw digits in the order they were pressed.
    pub keys_pressed: String,
}

impl GoToPageEntry {
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty() && self.keys_pressed.is_empty()
    }
}

/// Completion tracking for display hardware operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HardwareState {
    pub warming_up: TaskFlag,
    pub resetting_display: TaskFlag,
}
