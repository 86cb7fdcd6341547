use crate::state::{Dimensions, TaskFlag};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Re-publish the current state to subscribers.
    Trigger,
    SetDimensions(Dimensions),
    GoToLibrary,
    GoToSystemMenu,
    /// Leave a menu and return to the open book.
    CloseMenu,
    NextPage,
    PreviousPage,
    BackupLog(TaskFlag),
    UpdateUi(bool),
    Shutdown,
}

impl Intent for AppIntent {}
