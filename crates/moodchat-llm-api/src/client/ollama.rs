use std::time::Duration;

use async_trait::async_trait;

use crate::client::{LlmClient, LlmError};
use moodchat_models::{ChatRequest, ChatResponse, Message};

/// Ollama server LLM client speaking the non-streaming `/api/chat` protocol
pub struct OllamaClient {
    base_url: String,
    model: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String, timeout: Duration) -> Self {
        // Ensure base_url doesn't end with a slash
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            model,
            timeout,
            client: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn chat(&self, messages: Vec<Message>) -> Result<Message, LlmError> {
        let request = ChatRequest::new(self.model.clone(), messages);

        let response = self
            .client
            .post(self.chat_url())
            .timeout(self.timeout)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(LlmError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response_text = response.text().await.map_err(LlmError::from_transport)?;
        let chat_response: ChatResponse = serde_json::from_str(&response_text)
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        // An empty reply is treated as a protocol violation rather than
        // silently handed to the pipeline as generated text
        if chat_response.message.content.is_empty() {
            return Err(LlmError::MalformedResponse(
                "response contained no message content".to_string(),
            ));
        }

        Ok(chat_response.message)
    }
}
