// src/state.rs
use std::sync::Arc;

use crate::relay::RelayHub;
use crate::services::completion::CompletionBackend;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub backend: Arc<dyn CompletionBackend>,
    pub relay: RelayHub,
}

impl AppState {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend,
            relay: RelayHub::new(),
        }
    }
}
