use std::sync::Arc;

use tokio::sync::mpsc;

use crate::state::AppState;

use super::dispatcher::Store;
use super::types::StoreCommand;

pub struct StoreServer {
    receiver: mpsc::Receiver<StoreCommand>,
    store: Store,
}

impl StoreServer {
    pub fn new(receiver: mpsc::Receiver<StoreCommand>, store: Store) -> Self {
        Self { receiver, store }
    }

    /// Serve commands until every handle is dropped, then return the final
    /// snapshot.
    pub async fn run(mut self) -> Arc<AppState> {
        while let Some(command) = self.receiver.recv().await {
            match command {
                StoreCommand::Dispatch { action, respond_to } => {
                    let result = self.store.dispatch(action);
                    if respond_to.send(result).is_err() {
                        tracing::trace!("Store: Dispatch response dropped (receiver gone)");
                    }
                }
                StoreCommand::GetState { respond_to } => {
                    if respond_to.send(self.store.state()).is_err() {
                        tracing::trace!("Store: GetState response dropped (receiver gone)");
                    }
                }
                StoreCommand::Subscribe {
                    subscriber,
                    respond_to,
                } => {
                    self.store.subscribe(subscriber);
                    if respond_to.send(()).is_err() {
                        tracing::trace!("Store: Subscribe response dropped (receiver gone)");
                    }
                }
            }
        }
        tracing::debug!("store stopped, all handles dropped");
        self.store.state()
    }
}
