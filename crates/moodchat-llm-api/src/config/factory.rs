use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::client::{ollama::OllamaClient, LlmClient};
use crate::config::{normalize_base_url, DEFAULT_MODEL, OLLAMA_API_URL};

/// Client factory for creating LLM clients
pub struct ClientFactory;

impl ClientFactory {
    /// Create an LLM client for the Ollama backend
    ///
    /// # Arguments
    /// * `model` - Model name to use (falls back to `OLLAMA_MODEL`, then the default)
    /// * `base_url` - Server base URL (falls back to `OLLAMA_URL`, then the default)
    /// * `timeout` - Request timeout applied to every backend call
    ///
    /// # Returns
    /// Arc-wrapped LLM client implementing the LlmClient trait
    pub fn create(
        model: Option<String>,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Arc<dyn LlmClient> {
        let url = Self::resolve_base_url(base_url);
        let model = Self::resolve_model(model);

        Arc::new(OllamaClient::new(normalize_base_url(&url), model, timeout))
    }

    /// Resolve the model name: explicit choice, then `OLLAMA_MODEL`, then
    /// the default. `create` applies the same precedence, so callers that
    /// need the name for display resolve it here and pass it back in.
    pub fn resolve_model(model: Option<String>) -> String {
        model
            .or_else(|| env::var("OLLAMA_MODEL").ok())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    /// Resolve the server base URL: explicit choice, then `OLLAMA_URL`,
    /// then the default
    pub fn resolve_base_url(base_url: Option<String>) -> String {
        base_url
            .or_else(|| env::var("OLLAMA_URL").ok())
            .unwrap_or_else(|| OLLAMA_API_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env var is never touched concurrently
    #[test]
    fn test_resolve_model_precedence() {
        env::set_var("OLLAMA_MODEL", "from-env");
        assert_eq!(
            ClientFactory::resolve_model(Some("mistral".to_string())),
            "mistral"
        );
        assert_eq!(ClientFactory::resolve_model(None), "from-env");

        env::remove_var("OLLAMA_MODEL");
        assert_eq!(ClientFactory::resolve_model(None), DEFAULT_MODEL);
    }
}
