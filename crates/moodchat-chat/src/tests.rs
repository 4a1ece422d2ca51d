use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use moodchat_llm_api::{LlmClient, LlmError};
use moodchat_models::Message;

use crate::pipeline::{respond, SUMMARY_INTERVAL};
use crate::sentiment::Sentiment;
use crate::state::ChatState;
use crate::summarizer::build_summary_prompt;

/// Scripted in-memory client: pops one canned result per call and records
/// every prompt it was given
struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn new(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Client that answers every call with the same reply text
    fn echoing(reply: &str) -> Self {
        Self {
            replies: Mutex::new(
                std::iter::repeat_with(|| Ok(reply.to_string()))
                    .take(64)
                    .collect(),
            ),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn chat(&self, messages: Vec<Message>) -> Result<Message, LlmError> {
        let prompt = messages
            .first()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.prompts.lock().unwrap().push(prompt);

        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(Message::assistant(text)),
            Some(Err(err)) => Err(err),
            None => panic!("scripted client ran out of replies"),
        }
    }
}

fn backend_down() -> LlmError {
    LlmError::Api {
        status: 503,
        message: "service unavailable".to_string(),
    }
}

#[tokio::test]
async fn test_respond_appends_exactly_one_turn() {
    let client = ScriptedClient::echoing("reply");
    let mut state = ChatState::new();

    for n in 1..=4 {
        state = respond(&client, &state, &format!("message {}", n))
            .await
            .unwrap();
        assert_eq!(state.turns.len(), n);
    }
}

#[tokio::test]
async fn test_respond_records_user_and_bot_text() {
    let client = ScriptedClient::new(vec![Ok("hello back".to_string())]);
    let state = respond(&client, &ChatState::new(), "hello")
        .await
        .unwrap();

    assert_eq!(state.turns[0].user_text, "hello");
    assert_eq!(state.turns[0].bot_text, "hello back");
    assert_eq!(state.last_reply(), Some("hello back"));
    assert_eq!(state.pending_input, "hello");
}

#[tokio::test]
async fn test_sad_input_yields_negative_state() {
    let client = ScriptedClient::new(vec![Ok("I'm sorry to hear that".to_string())]);
    let state = respond(&client, &ChatState::new(), "I am sad")
        .await
        .unwrap();

    assert_eq!(state.turns.len(), 1);
    assert_eq!(state.sentiment, Sentiment::Negative);
    assert_eq!(state.summary, "");
}

#[tokio::test]
async fn test_summary_only_changes_on_interval_multiples() {
    let client = ScriptedClient::echoing("reply");
    let mut state = ChatState::new();

    for n in 1..SUMMARY_INTERVAL {
        state = respond(&client, &state, &format!("turn {}", n))
            .await
            .unwrap();
        assert_eq!(state.summary, "", "summary touched before the window filled");
    }

    state = respond(&client, &state, "turn 5").await.unwrap();
    assert_eq!(state.turns.len(), SUMMARY_INTERVAL);
    assert_eq!(state.summary, "reply");

    // Turns 6 through 9 must leave the digest alone
    for n in (SUMMARY_INTERVAL + 1)..(SUMMARY_INTERVAL * 2) {
        state = respond(&client, &state, &format!("turn {}", n))
            .await
            .unwrap();
        assert_eq!(state.summary, "reply");
    }
}

#[tokio::test]
async fn test_summary_prompt_concatenates_full_history() {
    let mut replies: Vec<Result<String, LlmError>> = (1..=SUMMARY_INTERVAL)
        .map(|n| Ok(format!("r{}", n)))
        .collect();
    replies.push(Ok("the digest".to_string()));
    let client = ScriptedClient::new(replies);

    let mut state = ChatState::new();
    for n in 1..=SUMMARY_INTERVAL {
        state = respond(&client, &state, &format!("u{}", n)).await.unwrap();
    }

    assert_eq!(state.summary, "the digest");

    let prompts = client.prompts();
    assert_eq!(prompts.len(), SUMMARY_INTERVAL + 1);
    assert_eq!(
        prompts[SUMMARY_INTERVAL],
        "Summarize this conversation: u1 r1\nu2 r2\nu3 r3\nu4 r4\nu5 r5"
    );
    // The recorded prompt is exactly what the summarizer builds
    assert_eq!(prompts[SUMMARY_INTERVAL], build_summary_prompt(&state));
}

#[tokio::test]
async fn test_adapter_failure_leaves_prior_state_intact() {
    let client = ScriptedClient::new(vec![Ok("first".to_string()), Err(backend_down())]);
    let state = respond(&client, &ChatState::new(), "one").await.unwrap();
    assert_eq!(state.turns.len(), 1);

    let err = respond(&client, &state, "two").await.unwrap_err();
    assert!(matches!(err, LlmError::Api { status: 503, .. }));
    // The snapshot the caller holds is untouched
    assert_eq!(state.turns.len(), 1);
    assert_eq!(state.last_reply(), Some("first"));
}

#[tokio::test]
async fn test_summarize_failure_preserves_pre_summary_state() {
    let mut replies: Vec<Result<String, LlmError>> = (1..=SUMMARY_INTERVAL)
        .map(|n| Ok(format!("r{}", n)))
        .collect();
    // The 6th call is the summarization; it fails
    replies.push(Err(backend_down()));
    let client = ScriptedClient::new(replies);

    let mut state = ChatState::new();
    for n in 1..SUMMARY_INTERVAL {
        state = respond(&client, &state, &format!("u{}", n)).await.unwrap();
    }
    assert_eq!(state.turns.len(), SUMMARY_INTERVAL - 1);

    let err = respond(&client, &state, "u5").await.unwrap_err();
    assert!(matches!(err, LlmError::Api { .. }));
    assert_eq!(state.turns.len(), SUMMARY_INTERVAL - 1);
    assert_eq!(state.summary, "");
}

#[tokio::test]
async fn test_blank_input_still_reaches_the_adapter() {
    let client = ScriptedClient::new(vec![Ok("who's there?".to_string())]);
    let state = respond(&client, &ChatState::new(), "").await.unwrap();

    assert_eq!(client.prompts(), vec!["".to_string()]);
    assert_eq!(state.turns.len(), 1);
    assert_eq!(state.sentiment, Sentiment::Neutral);
}

#[test]
fn test_with_turn_is_copy_on_write() {
    let original = ChatState::new();
    let derived = original.with_turn("hi", "hello");

    assert_eq!(original.turns.len(), 0);
    assert_eq!(derived.turns.len(), 1);
    assert_eq!(original, ChatState::new());
}

#[test]
fn test_with_summary_changes_only_the_summary() {
    let base = ChatState::new().with_turn("I am happy", "great!");
    let summarized = base.with_summary("a digest".to_string());

    assert_eq!(summarized.summary, "a digest");
    assert_eq!(summarized.turns, base.turns);
    assert_eq!(summarized.sentiment, base.sentiment);
    assert_eq!(summarized.pending_input, base.pending_input);
}
