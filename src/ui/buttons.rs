//! Input binding resolver: button presses to actions.
//!
//! Tables are keyed `[location][press kind][button id]`. A press with no
//! binding is normal (most buttons do nothing on most screens) and is
//! skipped without affecting the other presses of the same poll.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::actions::{self, Action};
use crate::state::{Location, TaskFlag};
use crate::ui::system_menu::menu_buttons;

/// How a button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressKind {
    Single,
    Long,
    Double,
}

impl PressKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PressKind::Single => "single",
            PressKind::Long => "long",
            PressKind::Double => "double",
        }
    }
}

impl FromStr for PressKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(PressKind::Single),
            "long" => Ok(PressKind::Long),
            "double" => Ok(PressKind::Double),
            other => Err(format!("unknown press kind '{}'", other)),
        }
    }
}

/// One button reported by the driver in a polling cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonPress {
    pub id: String,
    pub kind: PressKind,
}

impl ButtonPress {
    pub fn new(id: impl Into<String>, kind: PressKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn single(id: impl Into<String>) -> Self {
        Self::new(id, PressKind::Single)
    }
}

/// Parses `"<id>"` or `"<id> <kind>"`, e.g. `"3"` or `"> long"`.
impl FromStr for ButtonPress {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let id = parts.next().ok_or_else(|| "empty button press".to_string())?;
        let kind = match parts.next() {
            Some(kind) => kind.parse()?,
            None => PressKind::Single,
        };
        if parts.next().is_some() {
            return Err(format!("unexpected input after button press '{}'", s));
        }
        Ok(ButtonPress::new(id, kind))
    }
}

type KindTable = HashMap<PressKind, HashMap<String, Action>>;

/// Per-location binding tables.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    tables: HashMap<Location, KindTable>,
}

impl Bindings {
    /// The reader's button layout.
    pub fn standard() -> Self {
        let mut bindings = Self::default();

        use Location::*;
        use PressKind::*;

        bindings.bind(Library, Single, "<", actions::previous_page());
        bindings.bind(Library, Single, ">", actions::next_page());
        bindings.bind(Library, Single, "L", actions::close_menu());
        bindings.bind(Library, Single, "R", actions::go_to_system_menu());
        // Row 1 is the header; rows 2-9 list books.
        for row in 2..=9usize {
            bindings.bind(Library, Single, &row.to_string(), actions::go_to_book(row - 2));
        }

        bindings.bind(Book, Single, "<", actions::previous_page());
        bindings.bind(Book, Single, ">", actions::next_page());
        bindings.bind(Book, Single, "L", actions::go_to_library());
        bindings.bind(Book, Single, "R", actions::go_to_system_menu());
        bindings.bind(Book, Single, "1", actions::toggle_home_menu());
        bindings.bind(Book, Single, "2", actions::enter_go_to_page());
        bindings.bind(Book, Single, "3", actions::go_to_start());
        bindings.bind(Book, Long, "<", actions::skip_pages(-10));
        bindings.bind(Book, Long, ">", actions::skip_pages(10));

        for digit in 1..=9u8 {
            bindings.bind(GoToPage, Single, &digit.to_string(), actions::go_to_page_key(digit));
        }
        bindings.bind(GoToPage, Single, ">", actions::go_to_page_key(0));
        bindings.bind(GoToPage, Single, "<", actions::go_to_page_delete());
        bindings.bind(GoToPage, Single, "L", actions::go_to_page_cancel());
        bindings.bind(GoToPage, Single, "R", actions::go_to_page_confirm());

        bindings.bind(SystemMenu, Single, ">", actions::next_page());
        bindings.bind(SystemMenu, Single, "<", actions::previous_page());
        bindings.bind(SystemMenu, Single, "L", actions::close_menu());
        bindings.bind(
            SystemMenu,
            Single,
            "R",
            actions::reset_display(TaskFlag::InProgress),
        );
        for (button, action) in menu_buttons() {
            bindings.bind(SystemMenu, Single, &button, action);
        }

        bindings
    }

    /// Bind `button` to `action`, replacing any earlier binding.
    pub fn bind(&mut self, location: Location, kind: PressKind, button: &str, action: Action) {
        self.tables
            .entry(location)
            .or_default()
            .entry(kind)
            .or_default()
            .insert(button.to_string(), action);
    }

    pub fn lookup(&self, location: Location, kind: PressKind, button: &str) -> Option<&Action> {
        self.tables.get(&location)?.get(&kind)?.get(button)
    }

    /// Actions for `presses`, in press order; unbound presses are skipped.
    pub fn resolve(&self, location: Location, presses: &[ButtonPress]) -> Vec<Action> {
        presses
            .iter()
            .filter_map(|press| {
                let action = self.lookup(location, press.kind, &press.id);
                if action.is_none() {
                    tracing::debug!(
                        button = %press.id,
                        kind = press.kind.as_str(),
                        location = %location,
                        "no binding for button"
                    );
                }
                action.cloned()
            })
            .collect()
    }

    /// Every action any table can produce.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.tables
            .values()
            .flat_map(|kinds| kinds.values())
            .flat_map(|buttons| buttons.values())
    }
}
