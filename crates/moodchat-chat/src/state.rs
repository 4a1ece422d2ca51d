use serde::{Deserialize, Serialize};

use crate::sentiment::{classify, Sentiment};

/// One user input paired with the generated reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user_text: String,
    pub bot_text: String,
}

/// The conversation snapshot threaded through the pipeline.
///
/// Snapshots are immutable from the caller's point of view: every pipeline
/// step derives a fresh `ChatState` from the previous one, so a failed
/// step leaves the caller holding a fully valid state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatState {
    /// Completed exchanges, in order. Append-only; insertion order defines
    /// the summarization window and the last-reply lookup.
    pub turns: Vec<Turn>,
    /// Mood of the most recently processed user input
    pub sentiment: Sentiment,
    /// Running digest of the whole conversation; empty until the turn
    /// count first reaches the summary interval
    pub summary: String,
    /// The input being processed in the current step
    pub pending_input: String,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the next snapshot from this one plus a completed exchange.
    /// Appends exactly one turn and re-derives the sentiment from the
    /// user text; `summary` carries over unchanged.
    pub fn with_turn(&self, user_text: &str, bot_text: &str) -> Self {
        let mut turns = self.turns.clone();
        turns.push(Turn {
            user_text: user_text.to_string(),
            bot_text: bot_text.to_string(),
        });
        Self {
            turns,
            sentiment: classify(user_text),
            summary: self.summary.clone(),
            pending_input: user_text.to_string(),
        }
    }

    /// Derive a snapshot that differs only in its summary
    pub fn with_summary(&self, summary: String) -> Self {
        Self {
            summary,
            ..self.clone()
        }
    }

    /// The bot reply from the most recent turn, if any
    pub fn last_reply(&self) -> Option<&str> {
        self.turns.last().map(|t| t.bot_text.as_str())
    }
}
