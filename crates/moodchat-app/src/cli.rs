use clap::Parser;

/// CLI arguments for moodchat
#[derive(Parser, Debug)]
#[command(name = "moodchat")]
#[command(about = "MoodChat - mood-aware console chat over a local Ollama backend")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Base URL of the Ollama server (e.g., http://localhost:11434)
    #[arg(long, value_name = "URL", env = "OLLAMA_URL")]
    pub url: Option<String>,

    /// Model name to chat with
    #[arg(long, value_name = "MODEL", env = "OLLAMA_MODEL")]
    pub model: Option<String>,

    /// Request timeout for backend calls, in seconds
    #[arg(long, value_name = "SECS", default_value_t = moodchat_llm_api::DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Print request/summary debug lines
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Disable the JSONL conversation transcript under logs/
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_log: bool,
}
