// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One broadcast frame on the relay. Created per broadcast, delivered to
/// every connected client, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// Inbound relay event. A missing `lang` resolves to English at the
/// transport boundary.
#[derive(Debug, Deserialize)]
pub struct ChatEvent {
    pub message: String,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageReply {
    pub reply: String,
}
