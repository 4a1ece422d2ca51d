use serde::{Deserialize, Serialize};

use crate::types::Message;

/// Request body for the Ollama chat endpoint
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    /// Always false: the pipeline consumes whole replies, not chunks
    pub stream: bool,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            stream: false,
        }
    }
}
