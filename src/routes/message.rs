// src/routes/message.rs
use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    error::AppError, message::MessageReply, services::completion::resolve_reply,
    state::SharedState,
};

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Single-shot fallback endpoint. The body is validated by hand rather than
/// deserialized into a typed request: a missing or mistyped `message` must
/// map to the fixed error reply, not to an extractor rejection. Unparseable
/// JSON never reaches this handler; the extractor rejects it with a 400.
pub async fn message_handler(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> Result<Json<MessageReply>, AppError> {
    let Some(message) = body.get("message").and_then(Value::as_str) else {
        return Err(AppError::BadRequest(
            "body must be an object with a string `message` field".to_string(),
        ));
    };

    // Resolve the language tag once, here at the boundary.
    let lang = body.get("lang").and_then(Value::as_str).unwrap_or("en");

    let reply = resolve_reply(state.backend.as_ref(), message, lang).await?;
    Ok(Json(MessageReply { reply }))
}
