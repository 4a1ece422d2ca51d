use serde::{Deserialize, Serialize};

use crate::types::Message;

/// Response body from the Ollama chat endpoint (non-streaming)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: String,
    pub message: Message,
    #[serde(default)]
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub total_duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prompt_eval_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub eval_count: Option<u64>,
}
