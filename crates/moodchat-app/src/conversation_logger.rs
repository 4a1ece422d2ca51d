use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

#[derive(Serialize)]
struct LogEntry<'a> {
    timestamp: String, // ISO-8601 local time
    role: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentiment: Option<&'a str>,
}

/// Appends one JSON line per message to `logs/moodchat-<timestamp>.jsonl`
pub struct ConversationLogger {
    file_path: PathBuf,
    file: tokio::fs::File,
}

impl ConversationLogger {
    /// Create a new logger; generates the file name based on the current local time.
    pub async fn new(workspace: &Path) -> Result<Self> {
        let logs_dir = workspace.join("logs");
        fs::create_dir_all(&logs_dir).await?;

        let now_local = Local::now();
        let filename = format!("moodchat-{}.jsonl", now_local.format("%Y-%m-%d-%H%M%S"));
        let file_path = logs_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;
        Ok(Self { file_path, file })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Append a single log entry. Write failures are swallowed so that a
    /// full disk never takes the chat down with it.
    pub async fn log(&mut self, role: &str, content: &str, sentiment: Option<&str>) {
        let entry = LogEntry {
            timestamp: Local::now().to_rfc3339(),
            role,
            content,
            sentiment,
        };

        if let Ok(mut line) = serde_json::to_string(&entry) {
            line.push('\n');
            let _ = self.file.write_all(line.as_bytes()).await;
            let _ = self.file.flush().await;
        }
    }
}
