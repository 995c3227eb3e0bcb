//! Binary for the business directory bot.

use anyhow::Result;
use clap::Parser;
use directory_bot::{handle_search, handle_stats, load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Search { query } => handle_search(query).await,
        Commands::Stats => handle_stats().await,
    }
}
