use std::sync::Arc;

use thiserror::Error;
use tokio::sync::oneshot;

use crate::actions::{Action, ActionError};
use crate::state::AppState;

/// Callback invoked with every committed snapshot.
pub type Subscriber = Box<dyn FnMut(&Arc<AppState>) + Send + 'static>;

/// Errors that can occur when dispatching an action.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// No reducer is registered for the action type.
    #[error("No reducer registered for action '{action}'")]
    UnknownAction { action: String },

    /// The reducer group rejected the action.
    #[error(transparent)]
    Action(#[from] ActionError),

    /// The store task has stopped.
    #[error("Store is no longer running")]
    Disconnected,
}

pub enum StoreCommand {
    Dispatch {
        action: Action,
        respond_to: oneshot::Sender<Result<Arc<AppState>, DispatchError>>,
    },
    GetState {
        respond_to: oneshot::Sender<Arc<AppState>>,
    },
    Subscribe {
        subscriber: Subscriber,
        respond_to: oneshot::Sender<()>,
    },
}
