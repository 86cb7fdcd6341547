use std::sync::Arc;

use crate::actions::{Action, ActionRegistry};
use crate::state::AppState;

use super::types::{DispatchError, Subscriber};

/// Owner of the current snapshot.
///
/// `dispatch` takes `&mut self`, so one dispatch always completes before
/// the next begins.
pub struct Store {
    state: Arc<AppState>,
    registry: ActionRegistry,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new(initial: AppState, registry: ActionRegistry) -> Self {
        Self {
            state: Arc::new(initial),
            registry,
            subscribers: Vec::new(),
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Run `action` through its reducer and commit the result.
    ///
    /// On error the snapshot is left as it was and no subscriber is called.
    pub fn dispatch(&mut self, action: Action) -> Result<Arc<AppState>, DispatchError> {
        let Some(apply) = self.registry.resolve(&action.kind) else {
            tracing::error!(action = %action.kind, "action type missing from reducer table");
            return Err(DispatchError::UnknownAction {
                action: action.kind,
            });
        };

        let current = AppState::clone(&self.state);
        let next = apply(current, &action.kind, action.value).map_err(|err| {
            tracing::error!(error = %err, "action rejected by reducer group");
            DispatchError::from(err)
        })?;

        tracing::trace!(action = %action.kind, location = %next.location, "dispatched");
        self.state = Arc::new(next);
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
        Ok(Arc::clone(&self.state))
    }
}
