//! Model-View-Intent (MVI) primitives for the reader UI.
//!
//! ```text
//! Button ──→ Action ──→ Intent ──→ Reducer ──→ AppState ──→ Subscribers
//! ```
//!
//! Every reducer group under [`crate::ui`] decodes the actions it owns into
//! its own intent enum and reduces the shared [`crate::state::AppState`].

/// Typed form of an action, owned by exactly one reducer group.
pub trait Intent: Send + 'static {}

/// Snapshot types a reducer may operate on.
///
/// Snapshots are cloned to derive new ones, compared to detect change and
/// shared read-only with subscribers on other tasks.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// A pure transition: `(State, Intent) -> State`.
///
/// Reducers never perform I/O and never fail; navigational edge cases
/// (pages out of range, empty libraries) clamp or leave the state alone.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
