// src/services/completion.rs
use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::rules;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("upstream returned {status}: {body}")]
    Api { status: StatusCode, body: String },
}

/// Role-tagged entry of a completion prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// Seam to the chat-completion service, so tests can substitute a
/// deterministic stub for the hosted API.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Returns the first choice's message content. `None` means the
    /// upstream answered without content, which is not an error here.
    async fn complete(
        &self,
        messages: &[PromptMessage],
    ) -> Result<Option<String>, CompletionError>;
}

pub struct OpenAiClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, api_base: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_base,
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiClient {
    async fn complete(
        &self,
        messages: &[PromptMessage],
    ) -> Result<Option<String>, CompletionError> {
        let body = json!({
            "model": rules::MODEL,
            "messages": messages,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api { status, body });
        }

        let payload: serde_json::Value = response.json().await?;
        Ok(payload["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string))
    }
}

/// Resolve a bot reply for one user message: fixed persona plus the shaped
/// user content, one completion call, no retry. A content-less upstream
/// answer becomes the empty string; everything else propagates.
pub async fn resolve_reply(
    backend: &dyn CompletionBackend,
    message: &str,
    lang: &str,
) -> Result<String, CompletionError> {
    let prompt = [
        PromptMessage::system(rules::PERSONA),
        PromptMessage::user(rules::user_content(message, lang)),
    ];

    Ok(backend.complete(&prompt).await?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Mutex;

    struct Recording {
        content: Option<String>,
        prompts: Mutex<Vec<Vec<PromptMessage>>>,
    }

    #[async_trait]
    impl CompletionBackend for Recording {
        async fn complete(
            &self,
            messages: &[PromptMessage],
        ) -> Result<Option<String>, CompletionError> {
            self.prompts.lock().await.push(messages.to_vec());
            Ok(self.content.clone())
        }
    }

    #[tokio::test]
    async fn prompt_is_persona_then_user() {
        let backend = Recording {
            content: Some("hello".into()),
            prompts: Mutex::new(Vec::new()),
        };

        let reply = resolve_reply(&backend, "book me in", "en").await.unwrap();
        assert_eq!(reply, "hello");

        let prompts = backend.prompts.lock().await;
        let prompt = &prompts[0];
        assert_eq!(prompt.len(), 2);
        assert_eq!(prompt[0].role, "system");
        assert!(prompt[0].content.contains("medical receptionist"));
        assert_eq!(prompt[1].role, "user");
        assert_eq!(prompt[1].content, "book me in");
    }

    #[tokio::test]
    async fn missing_content_resolves_to_empty_string() {
        let backend = Recording {
            content: None,
            prompts: Mutex::new(Vec::new()),
        };

        let reply = resolve_reply(&backend, "anything", "en").await.unwrap();
        assert_eq!(reply, "");
    }
}
