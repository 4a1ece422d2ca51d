use std::fmt;

use serde::{Deserialize, Serialize};

/// Keywords that mark an input as negative; this set is checked first, so
/// negative wins when an input matches both tables
pub const NEGATIVE_KEYWORDS: &[&str] = &["sad", "depressed", "anxious", "upset"];

/// Keywords that mark an input as positive
pub const POSITIVE_KEYWORDS: &[&str] = &["happy", "excited", "joyful"];

/// Coarse three-way mood label derived from keyword presence in user text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Positive,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify free text by case-insensitive substring lookup.
///
/// Pure and total: no input fails to classify.
pub fn classify(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();
    if NEGATIVE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        Sentiment::Negative
    } else if POSITIVE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}
