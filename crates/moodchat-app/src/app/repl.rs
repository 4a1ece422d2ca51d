use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::Cli;
use crate::conversation_logger::ConversationLogger;
use crate::safe_truncate;
use moodchat_chat::{respond, ChatState, Sentiment, SUMMARY_INTERVAL};
use moodchat_llm_api::ClientFactory;

/// Run the interactive read-eval-print loop.
///
/// One long-lived `ChatState` is held here and swapped for the pipeline's
/// new snapshot after every turn. A backend error propagates out and ends
/// the process; Ctrl-C / Ctrl-D end the session cleanly.
pub async fn run_repl_mode(cli: &Cli) -> Result<()> {
    // Resolved once; the banner, debug lines and the client all see the
    // same name
    let model_name = ClientFactory::resolve_model(cli.model.clone());

    println!("{}", "💬 MoodChat - mood-aware local chat".bright_cyan().bold());
    println!(
        "{}",
        format!(
            "Model: {} • summary every {} turns",
            model_name, SUMMARY_INTERVAL
        )
        .bright_black()
    );
    println!("{}", "Press Ctrl-C or Ctrl-D to exit\n".bright_black());

    let client = ClientFactory::create(
        Some(model_name.clone()),
        cli.url.clone(),
        Duration::from_secs(cli.timeout_secs),
    );

    // Transcript logging is best-effort; a failure here disables it but
    // never blocks the chat
    let mut logger = if cli.no_log {
        None
    } else {
        match ConversationLogger::new(&env::current_dir()?).await {
            Ok(l) => Some(l),
            Err(e) => {
                eprintln!("Logging disabled: {}", e);
                None
            }
        }
    };

    let mut rl = DefaultEditor::new()?;
    let mut state = ChatState::new();

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                if !line.is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }

                if cli.verbose {
                    println!(
                        "{}",
                        format!("→ sending to {}: {}", model_name, safe_truncate(&line, 120))
                            .bright_black()
                    );
                }

                // Blank lines are processed like any other input; the
                // classifier answers neutral and the backend is still asked
                let summary_before = state.summary.clone();
                state = respond(client.as_ref(), &state, &line)
                    .await
                    .context("backend call failed")?;

                let reply = state.last_reply().unwrap_or_default();
                println!("{} {}", "Bot:".bright_cyan().bold(), reply);
                println!("{}", mood_line(state.sentiment));
                println!();

                if cli.verbose && state.summary != summary_before {
                    println!(
                        "{}",
                        format!("📝 Summary updated: {}", safe_truncate(&state.summary, 200))
                            .bright_black()
                    );
                }

                if let Some(logger) = &mut logger {
                    logger.log("user", &line, None).await;
                    logger
                        .log("assistant", reply, Some(state.sentiment.as_str()))
                        .await;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Render the mood tag, colored by label
fn mood_line(sentiment: Sentiment) -> String {
    let tag = format!("[Mood: {}]", sentiment);
    match sentiment {
        Sentiment::Negative => tag.red().to_string(),
        Sentiment::Positive => tag.green().to_string(),
        Sentiment::Neutral => tag.bright_black().to_string(),
    }
}
