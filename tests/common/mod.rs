use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::http::StatusCode;
use tokio::sync::Mutex;

use clinic_chat_backend::routes::create_router;
use clinic_chat_backend::services::completion::{
    CompletionBackend, CompletionError, PromptMessage,
};
use clinic_chat_backend::state::{AppState, SharedState};

/// What the stub upstream answers with.
pub enum StubReply {
    Text(&'static str),
    /// A choice whose message carries no content.
    NoContent,
    Fail,
}

/// Deterministic completion backend that records every prompt it is sent.
pub struct StubBackend {
    reply: StubReply,
    pub prompts: Mutex<Vec<Vec<PromptMessage>>>,
}

impl StubBackend {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub async fn call_count(&self) -> usize {
        self.prompts.lock().await.len()
    }

    /// The user-role content of the most recent prompt.
    pub async fn last_user_content(&self) -> String {
        let prompts = self.prompts.lock().await;
        let prompt = prompts.last().expect("no completion call recorded");
        prompt
            .iter()
            .find(|m| m.role == "user")
            .expect("prompt without a user entry")
            .content
            .clone()
    }
}

#[async_trait]
impl CompletionBackend for StubBackend {
    async fn complete(
        &self,
        messages: &[PromptMessage],
    ) -> Result<Option<String>, CompletionError> {
        self.prompts.lock().await.push(messages.to_vec());
        match &self.reply {
            StubReply::Text(text) => Ok(Some(text.to_string())),
            StubReply::NoContent => Ok(None),
            StubReply::Fail => Err(CompletionError::Api {
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: "stub outage".to_string(),
            }),
        }
    }
}

#[allow(dead_code)]
pub fn state_with(reply: StubReply) -> (SharedState, Arc<StubBackend>) {
    let backend = Arc::new(StubBackend::new(reply));
    let state = Arc::new(AppState::new(backend.clone()));
    (state, backend)
}

#[allow(dead_code)]
pub fn app_with(reply: StubReply) -> (Router, Arc<StubBackend>) {
    let (state, backend) = state_with(reply);
    (create_router().with_state(state), backend)
}
