//! The combined reducer table.
//!
//! Each reducer group lists the operation names it answers to. The registry
//! is built once at startup from an explicit list of groups and refuses to
//! build if two groups claim the same name, so every action type resolves
//! to exactly one reducer.

use std::collections::HashMap;

use thiserror::Error;

use crate::actions::{Action, ActionError, ActionValue};
use crate::state::AppState;
use crate::ui::app::AppReducer;
use crate::ui::book::BookReducer;
use crate::ui::go_to_page::GoToPageReducer;
use crate::ui::hardware::HardwareReducer;
use crate::ui::library::LibraryReducer;
use crate::ui::mvi::Reducer;

/// Errors detected while building the registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("Action '{action}' is defined by both the {first_group} and {second_group} groups")]
    DuplicateAction {
        action: &'static str,
        first_group: &'static str,
        second_group: &'static str,
    },
}

/// A reducer group that can be entered into the registry.
pub trait ReducerGroup: Reducer<State = AppState> {
    /// Group name, for diagnostics.
    const NAME: &'static str;

    /// Every action type this group handles.
    const OPERATIONS: &'static [&'static str];

    /// Turn one of this group's actions into its intent.
    fn decode(action: &str, value: ActionValue) -> Result<Self::Intent, ActionError>;
}

/// Decodes and reduces an action for one group.
pub type ApplyFn = fn(AppState, &str, ActionValue) -> Result<AppState, ActionError>;

/// A group as stored in the registry.
#[derive(Clone, Copy)]
pub struct GroupEntry {
    pub name: &'static str,
    pub operations: &'static [&'static str],
    pub apply: ApplyFn,
}

impl GroupEntry {
    pub fn of<G: ReducerGroup>() -> Self {
        Self {
            name: G::NAME,
            operations: G::OPERATIONS,
            apply: apply_group::<G>,
        }
    }
}

impl std::fmt::Debug for GroupEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupEntry")
            .field("name", &self.name)
            .field("operations", &self.operations)
            .finish()
    }
}

fn apply_group<G: ReducerGroup>(
    state: AppState,
    action: &str,
    value: ActionValue,
) -> Result<AppState, ActionError> {
    let intent = G::decode(action, value)?;
    Ok(G::reduce(state, intent))
}

/// The five reducer groups of the reader, in registration order.
pub fn standard_groups() -> Vec<GroupEntry> {
    vec![
        GroupEntry::of::<AppReducer>(),
        GroupEntry::of::<LibraryReducer>(),
        GroupEntry::of::<BookReducer>(),
        GroupEntry::of::<GoToPageReducer>(),
        GroupEntry::of::<HardwareReducer>(),
    ]
}

/// Maps every action type to the group that reduces it.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    table: HashMap<&'static str, GroupEntry>,
    order: Vec<&'static str>,
}

impl ActionRegistry {
    /// Build the registry for the reader's own groups.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::build(&standard_groups())
    }

    /// Build a registry from `groups`.
    ///
    /// # Errors
    /// Returns `RegistryError::DuplicateAction` for the first action name
    /// claimed twice, scanning groups and operations in order.
    pub fn build(groups: &[GroupEntry]) -> Result<Self, RegistryError> {
        let mut table: HashMap<&'static str, GroupEntry> = HashMap::new();
        let mut order = Vec::new();

        for group in groups {
            for &action in group.operations {
                if let Some(existing) = table.get(action) {
                    return Err(RegistryError::DuplicateAction {
                        action,
                        first_group: existing.name,
                        second_group: group.name,
                    });
                }
                table.insert(action, *group);
                order.push(action);
            }
        }

        tracing::debug!(actions = order.len(), groups = groups.len(), "action registry built");
        Ok(Self { table, order })
    }

    /// The reducer for `action`, if any group defines it.
    pub fn resolve(&self, action: &str) -> Option<ApplyFn> {
        self.table.get(action).map(|group| group.apply)
    }

    /// Name of the group defining `action`.
    pub fn group_of(&self, action: &str) -> Option<&'static str> {
        self.table.get(action).map(|group| group.name)
    }

    pub fn contains(&self, action: &str) -> bool {
        self.table.contains_key(action)
    }

    /// All action types, in registration order.
    pub fn action_types(&self) -> &[&'static str] {
        &self.order
    }

    /// An action creator for `action`, if it is registered.
    pub fn creator(&self, action: &str) -> Option<ActionCreator> {
        self.table
            .get_key_value(action)
            .map(|(&name, _)| ActionCreator { name })
    }
}

/// Builds actions of one registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionCreator {
    name: &'static str,
}

impl ActionCreator {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn create(&self, value: ActionValue) -> Action {
        Action::new(self.name, value)
    }

    /// The action with no payload.
    pub fn empty(&self) -> Action {
        self.create(ActionValue::None)
    }
}
