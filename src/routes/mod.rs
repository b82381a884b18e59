// src/routes/mod.rs
pub mod message;
pub mod ws;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::SharedState;
use message::{health_handler, message_handler};
use ws::ws_handler;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/message", post(message_handler))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
}
