//! MoodChat Application Library
//!
//! Console front end for the moodchat conversation pipeline.

// Re-export workspace crates
pub use moodchat_chat as chat;
pub use moodchat_llm_api as llm_api;

// Local modules
pub mod app;
pub mod cli;
pub mod conversation_logger;

// Re-exports from local modules
pub use app::run_repl_mode;
pub use cli::Cli;
pub use conversation_logger::ConversationLogger;

/// Truncate a string to at most `max_chars` characters, appending an
/// ellipsis when anything was cut. Counts characters, not bytes, so
/// multibyte input is never split mid-code-point.
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let head: String = s.chars().take(keep).collect();
    format!("{head}...")
}
