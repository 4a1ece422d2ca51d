use moodchat_llm_api::{LlmClient, LlmError};

use crate::state::ChatState;

/// Instruction text prepended to the joined turn history
const SUMMARY_INSTRUCTION: &str = "Summarize this conversation: ";

/// Build the digest prompt: every turn rendered as `user bot`, joined
/// with newlines, behind the instruction text
pub fn build_summary_prompt(state: &ChatState) -> String {
    let joined = state
        .turns
        .iter()
        .map(|t| format!("{} {}", t.user_text, t.bot_text))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}{}", SUMMARY_INSTRUCTION, joined)
}

/// Recompute the running summary by delegating the full turn history to
/// the model. The returned snapshot differs from `state` only in
/// `summary`; the raw reply replaces the previous digest wholesale.
///
/// On adapter failure the error propagates and the caller keeps its
/// pre-summary state.
pub async fn summarize(client: &dyn LlmClient, state: &ChatState) -> Result<ChatState, LlmError> {
    let summary = client.generate(&build_summary_prompt(state)).await?;
    Ok(state.with_summary(summary))
}
