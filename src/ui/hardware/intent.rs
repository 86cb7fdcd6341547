use crate::state::TaskFlag;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HardwareIntent {
    WarmUp(TaskFlag),
    ResetDisplay(TaskFlag),
}

impl Intent for HardwareIntent {}
