//! Store/dispatcher.
//!
//! The [`Store`] owns the snapshot and runs on a single [`StoreServer`]
//! task; any number of cloned [`StoreHandle`]s send it commands over a
//! bounded channel and await the reply. Commands are processed strictly in
//! arrival order.

mod client;
mod dispatcher;
mod server;
mod types;


use tokio::sync::mpsc;

pub use client::StoreHandle;
pub use dispatcher::Store;
pub use server::StoreServer;
pub use types::{DispatchError, StoreCommand, Subscriber};

const STORE_BUFFER: usize = 64;

pub struct StoreLayer;

impl StoreLayer {
    /// Split `store` into a handle for callers and the task that owns it.
    pub fn new(store: Store) -> (StoreHandle, StoreServer) {
        let (sender, receiver) = mpsc::channel(STORE_BUFFER);
        (StoreHandle::new(sender), StoreServer::new(receiver, store))
    }
}
