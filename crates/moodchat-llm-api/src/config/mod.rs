pub mod factory;
pub use factory::ClientFactory;

/// Default Ollama API URL
pub const OLLAMA_API_URL: &str = "http://localhost:11434";

/// Default model name
pub const DEFAULT_MODEL: &str = "llama3";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Normalize a base URL by stripping any trailing slashes; the client
/// appends the endpoint path itself
pub fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:11434/"),
            "http://localhost:11434"
        );
    }

    #[test]
    fn test_normalize_leaves_bare_url_alone() {
        assert_eq!(
            normalize_base_url("http://localhost:11434"),
            "http://localhost:11434"
        );
    }
}
