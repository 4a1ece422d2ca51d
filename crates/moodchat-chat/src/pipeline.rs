use moodchat_llm_api::{LlmClient, LlmError};

use crate::state::ChatState;
use crate::summarizer::summarize;

/// Summary recomputation window: the digest is rebuilt whenever the turn
/// count is a positive multiple of this
pub const SUMMARY_INTERVAL: usize = 5;

/// Run one conversation turn: generate a reply, fold it into a new
/// snapshot, and recompute the summary when the window fills.
///
/// The model sees only the latest user text; prior turns are not
/// forwarded as context. Blank input is processed like any other line.
///
/// On adapter failure the error propagates unmodified and `state` is
/// untouched, so the caller can retry or abort with a valid snapshot.
pub async fn respond(
    client: &dyn LlmClient,
    state: &ChatState,
    user_text: &str,
) -> Result<ChatState, LlmError> {
    let reply = client.generate(user_text).await?;

    let next = state.with_turn(user_text, &reply);

    if next.turns.len() % SUMMARY_INTERVAL == 0 {
        return summarize(client, &next).await;
    }

    Ok(next)
}
