use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum BookIntent {
    GoToStart,
    /// Move by a signed number of pages.
    SkipPages(i64),
    /// Jump to a page index; out-of-range targets clamp.
    GoToPage(i64),
    EnterGoToPage,
    ToggleHomeMenu,
}

impl Intent for BookIntent {}
