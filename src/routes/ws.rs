// src/routes/ws.rs
use axum::{
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use uuid::Uuid;

use crate::{
    error::ERROR_REPLY,
    message::{ChatEvent, ChatMessage, Sender},
    services::completion::resolve_reply,
    state::SharedState,
};

pub async fn ws_handler(State(state): State<SharedState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: SharedState) {
    let conn_id = Uuid::new_v4();
    tracing::info!(%conn_id, "websocket client connected");

    let (mut sink, mut stream) = socket.split();
    let mut rx = state.relay.subscribe();

    // Forward everything the hub broadcasts to this client.
    let mut send_task = tokio::spawn(async move {
        while let Ok(msg) = rx.recv().await {
            let Ok(text) = serde_json::to_string(&msg) else {
                continue;
            };
            if sink.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    // Read chat events until the client goes away.
    let recv_state = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = stream.next().await {
            let Message::Text(text) = msg else { continue };
            match serde_json::from_str::<ChatEvent>(&text) {
                Ok(event) => handle_chat_event(&recv_state, event),
                Err(err) => {
                    tracing::warn!(%conn_id, error = %err, "dropping unparseable chat event");
                }
            }
        }
    });

    // Either half ending means the connection is done.
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    tracing::info!(%conn_id, "websocket client disconnected");
}

/// Handle one inbound chat event: echo the user message to the whole room
/// first, then resolve the bot reply in its own task so a slow completion
/// never blocks later events. The echo always precedes this event's bot
/// reply; replies of different in-flight events may interleave.
pub fn handle_chat_event(state: &SharedState, event: ChatEvent) {
    let ChatEvent { message, lang } = event;
    let lang = lang.unwrap_or_else(|| "en".to_string());

    state.relay.broadcast(ChatMessage {
        sender: Sender::User,
        text: message.clone(),
    });

    let state = state.clone();
    tokio::spawn(async move {
        let text = match resolve_reply(state.backend.as_ref(), &message, &lang).await {
            Ok(reply) => reply,
            Err(err) => {
                // Never leak upstream detail to the chat surface.
                tracing::error!(error = %err, "completion failed, sending fallback reply");
                ERROR_REPLY.to_string()
            }
        };

        state.relay.broadcast(ChatMessage { sender: Sender::Bot, text });
    });
}
