use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum GoToPageIntent {
    /// A digit key, 0 to 9.
    Key(u8),
    /// Remove the last digit typed.
    Delete,
    Confirm,
    Cancel,
}

impl Intent for GoToPageIntent {}
