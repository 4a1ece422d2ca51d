use async_trait::async_trait;
use thiserror::Error;

use moodchat_models::Message;

pub mod ollama;

/// Errors surfaced by an LLM client. Each failure mode is a distinct
/// variant so callers can tell an unreachable backend from a garbled one.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("backend unreachable: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("backend request timed out")]
    Timeout,

    #[error("malformed backend response: {0}")]
    MalformedResponse(String),

    #[error("backend returned status {status}: {message}")]
    Api { status: u16, message: String },
}

impl LlmError {
    /// Map a reqwest transport error to the matching variant
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Connection(err)
        }
    }
}

/// LLM client trait - unified interface for text-generation backends
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a full message list and return the assistant reply message
    async fn chat(&self, messages: Vec<Message>) -> Result<Message, LlmError>;

    /// Single-prompt completion: wraps the prompt in one user-role message
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let reply = self.chat(vec![Message::user(prompt)]).await?;
        Ok(reply.content)
    }
}
