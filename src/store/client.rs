use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::actions::Action;
use crate::state::AppState;

use super::types::{DispatchError, StoreCommand, Subscriber};

/// Cloneable access to a running store.
#[derive(Clone)]
pub struct StoreHandle {
    sender: mpsc::Sender<StoreCommand>,
}

impl StoreHandle {
    pub fn new(sender: mpsc::Sender<StoreCommand>) -> Self {
        Self { sender }
    }

    /// Dispatch `action` and wait until its result is committed.
    pub async fn dispatch(&self, action: Action) -> Result<Arc<AppState>, DispatchError> {
        let (respond_to, receiver) = oneshot::channel();
        self.send(StoreCommand::Dispatch { action, respond_to })
            .await?;
        recv_reply(receiver).await?
    }

    /// The current snapshot.
    pub async fn state(&self) -> Result<Arc<AppState>, DispatchError> {
        let (respond_to, receiver) = oneshot::channel();
        self.send(StoreCommand::GetState { respond_to }).await?;
        recv_reply(receiver).await
    }

    /// Register a callback for every later commit.
    pub async fn subscribe(&self, subscriber: Subscriber) -> Result<(), DispatchError> {
        let (respond_to, receiver) = oneshot::channel();
        self.send(StoreCommand::Subscribe {
            subscriber,
            respond_to,
        })
        .await?;
        recv_reply(receiver).await
    }

    async fn send(&self, command: StoreCommand) -> Result<(), DispatchError> {
        self.sender
            .send(command)
            .await
            .map_err(|_| DispatchError::Disconnected)
    }
}

async fn recv_reply<T>(receiver: oneshot::Receiver<T>) -> Result<T, DispatchError> {
    receiver.await.map_err(|_| DispatchError::Disconnected)
}
