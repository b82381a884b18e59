// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::services::completion::CompletionError;

/// The only error text that ever reaches the chat surface. Internal detail
/// stays in the logs.
pub const ERROR_REPLY: &str = "Sorry, there was an error.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Upstream(#[from] CompletionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::BadRequest(reason) => {
                tracing::warn!(%reason, "rejected message request");
            }
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "completion call failed");
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "reply": ERROR_REPLY }))).into_response()
    }
}
