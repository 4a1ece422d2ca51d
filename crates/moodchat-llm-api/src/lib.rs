//! # moodchat-llm-api
//!
//! The boundary between moodchat and its text-generation backend.
//!
//! ## Features
//!
//! - **Unified Interface**: Single `LlmClient` trait so the pipeline and
//!   summarizer never know which backend they talk to
//! - **Ollama Support**: `OllamaClient` speaks the Ollama `/api/chat`
//!   non-streaming protocol
//! - **Typed Failures**: connection, timeout, malformed-response and
//!   API-status errors are distinct `LlmError` variants
//!
//! ## Example
//!
//! ```rust,no_run
//! use moodchat_llm_api::{ClientFactory, LlmClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), moodchat_llm_api::LlmError> {
//!     let client = ClientFactory::create(
//!         Some("llama3".to_string()),
//!         Some("http://localhost:11434".to_string()),
//!         Duration::from_secs(120),
//!     );
//!
//!     let reply = client.generate("Hello!").await?;
//!     println!("Response: {}", reply);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;

// Re-export commonly used types
pub use client::{LlmClient, LlmError, ollama::OllamaClient};

pub use config::{
    ClientFactory,
    OLLAMA_API_URL,
    DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS,
    normalize_base_url,
};
