use anyhow::Result;
use clap::Parser;

use moodchat_app::{run_repl_mode, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    run_repl_mode(&cli).await
}
