//! Conversation management for moodchat
//!
//! This crate provides the reusable core: the immutable conversation
//! state, the keyword sentiment classifier, the turn pipeline and the
//! history summarizer. The interactive loop in moodchat-app is the only
//! consumer, but nothing here knows about a console.

pub mod pipeline;
pub mod sentiment;
pub mod state;
pub mod summarizer;

// Re-export commonly used types
pub use pipeline::{respond, SUMMARY_INTERVAL};
pub use sentiment::{classify, Sentiment, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};
pub use state::{ChatState, Turn};
pub use summarizer::{build_summary_prompt, summarize};

#[cfg(test)]
mod tests;
