// src/relay.rs
use tokio::sync::broadcast;

use crate::message::ChatMessage;

const RELAY_CAPACITY: usize = 64;

/// Shared-room broadcast hub. One channel carries every chat frame to every
/// connected client; the subscriber set is the connected-party set, owned
/// entirely by this component.
#[derive(Debug, Clone)]
pub struct RelayHub {
    tx: broadcast::Sender<ChatMessage>,
}

impl RelayHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(RELAY_CAPACITY);
        Self { tx }
    }

    /// A new receiver for one connection's lifetime.
    pub fn subscribe(&self) -> broadcast::Receiver<ChatMessage> {
        self.tx.subscribe()
    }

    /// Fan a frame out to all connected clients, including the originator.
    /// A send error just means nobody is connected right now.
    pub fn broadcast(&self, msg: ChatMessage) {
        let _ = self.tx.send(msg);
    }

    pub fn connected_clients(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for RelayHub {
    fn default() -> Self {
        Self::new()
    }
}
