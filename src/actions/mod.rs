//! Actions: `{type, value}` records naming a state transition.
//!
//! Every reducer operation has a typed creator here; [`ActionRegistry`]
//! offers the same by name and owns the combined reducer table.

mod registry;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::{Book, Dimensions, TaskFlag};

pub use registry::{
    standard_groups, ActionCreator, ActionRegistry, ApplyFn, GroupEntry, ReducerGroup,
    RegistryError,
};

/// A request to run one reducer operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: ActionValue,
}

impl Action {
    pub fn new(kind: impl Into<String>, value: ActionValue) -> Self {
        Self {
            kind: kind.into(),
            value,
        }
    }
}

/// Payload carried by an action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionValue {
    #[default]
    None,
    Bool(bool),
    Number(i64),
    Dimensions(Dimensions),
    Flag(TaskFlag),
    Books(Vec<Book>),
    Filenames(Vec<String>),
}

/// Errors raised while turning an action into a group's intent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("Action '{action}' is not an operation of the {group} group")]
    UnknownOperation { group: &'static str, action: String },

    #[error("Action '{action}' expects a {expected} payload, got {found}")]
    InvalidPayload {
        action: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ActionValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ActionValue::None => "none",
            ActionValue::Bool(_) => "bool",
            ActionValue::Number(_) => "number",
            ActionValue::Dimensions(_) => "dimensions",
            ActionValue::Flag(_) => "flag",
            ActionValue::Books(_) => "books",
            ActionValue::Filenames(_) => "filenames",
        }
    }

    pub fn into_number(self, action: &str) -> Result<i64, ActionError> {
        match self {
            ActionValue::Number(n) => Ok(n),
            other => Err(other.mismatch(action, "number")),
        }
    }

    /// A non-negative number.
    pub fn into_index(self, action: &str) -> Result<usize, ActionError> {
        match self {
            ActionValue::Number(n) if n >= 0 => usize::try_from(n)
                .map_err(|_| ActionValue::Number(n).mismatch(action, "index")),
            other => Err(other.mismatch(action, "index")),
        }
    }

    pub fn into_bool(self, action: &str) -> Result<bool, ActionError> {
        match self {
            ActionValue::Bool(b) => Ok(b),
            other => Err(other.mismatch(action, "bool")),
        }
    }

    pub fn into_flag(self, action: &str) -> Result<TaskFlag, ActionError> {
        match self {
            ActionValue::Flag(flag) => Ok(flag),
            other => Err(other.mismatch(action, "flag")),
        }
    }

    pub fn into_dimensions(self, action: &str) -> Result<Dimensions, ActionError> {
        match self {
            ActionValue::Dimensions(dimensions) => Ok(dimensions),
            other => Err(other.mismatch(action, "dimensions")),
        }
    }

    pub fn into_books(self, action: &str) -> Result<Vec<Book>, ActionError> {
        match self {
            ActionValue::Books(books) => Ok(books),
            other => Err(other.mismatch(action, "books")),
        }
    }

    pub fn into_filenames(self, action: &str) -> Result<Vec<String>, ActionError> {
        match self {
            ActionValue::Filenames(filenames) => Ok(filenames),
            other => Err(other.mismatch(action, "filenames")),
        }
    }

    fn mismatch(&self, action: &str, expected: &'static str) -> ActionError {
        ActionError::InvalidPayload {
            action: action.to_string(),
            expected,
            found: self.kind_name(),
        }
    }
}

fn unit(kind: &str) -> Action {
    Action::new(kind, ActionValue::None)
}

// App group

pub fn trigger() -> Action {
    unit("trigger")
}

pub fn set_dimensions(dimensions: Dimensions) -> Action {
    Action::new("set_dimensions", ActionValue::Dimensions(dimensions))
}

pub fn go_to_library() -> Action {
    unit("go_to_library")
}

pub fn go_to_system_menu() -> Action {
    unit("go_to_system_menu")
}

pub fn close_menu() -> Action {
    unit("close_menu")
}

pub fn next_page() -> Action {
    unit("next_page")
}

pub fn previous_page() -> Action {
    unit("previous_page")
}

pub fn backup_log(flag: TaskFlag) -> Action {
    Action::new("backup_log", ActionValue::Flag(flag))
}

pub fn update_ui(value: bool) -> Action {
    Action::new("update_ui", ActionValue::Bool(value))
}

pub fn shutdown() -> Action {
    unit("shutdown")
}

// Library group

/// Open the `number`th book on the current library page.
pub fn go_to_book(number: usize) -> Action {
    Action::new(
        "go_to_book",
        ActionValue::Number(i64::try_from(number).unwrap_or(i64::MAX)),
    )
}

pub fn set_books(books: Vec<Book>) -> Action {
    Action::new("set_books", ActionValue::Books(books))
}

pub fn add_books(books: Vec<Book>) -> Action {
    Action::new("add_books", ActionValue::Books(books))
}

pub fn remove_books(filenames: Vec<String>) -> Action {
    Action::new("remove_books", ActionValue::Filenames(filenames))
}

pub fn replace_library(flag: TaskFlag) -> Action {
    Action::new("replace_library", ActionValue::Flag(flag))
}

// Book group

pub fn go_to_start() -> Action {
    unit("go_to_start")
}

pub fn skip_pages(delta: i64) -> Action {
    Action::new("skip_pages", ActionValue::Number(delta))
}

pub fn go_to_page(page: i64) -> Action {
    Action::new("go_to_page", ActionValue::Number(page))
}

pub fn enter_go_to_page() -> Action {
    unit("enter_go_to_page")
}

pub fn toggle_home_menu() -> Action {
    unit("toggle_home_menu")
}

// Go-to-page group

pub fn go_to_page_key(digit: u8) -> Action {
    Action::new("go_to_page_key", ActionValue::Number(i64::from(digit)))
}

pub fn go_to_page_delete() -> Action {
    unit("go_to_page_delete")
}

pub fn go_to_page_confirm() -> Action {
    unit("go_to_page_confirm")
}

pub fn go_to_page_cancel() -> Action {
    unit("go_to_page_cancel")
}

// Hardware group

pub fn warm_up(flag: TaskFlag) -> Action {
    Action::new("warm_up", ActionValue::Flag(flag))
}

pub fn reset_display(flag: TaskFlag) -> Action {
    Action::new("reset_display", ActionValue::Flag(flag))
}
