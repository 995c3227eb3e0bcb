//! CLI parser and the one-shot subcommands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::components::build_bot_components;
use crate::config::BotConfig;
use crate::outcome::Outcome;

#[derive(Parser)]
#[command(name = "directory-bot")]
#[command(about = "Business directory bot: run on Telegram, search or inspect the directory", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Search the directory from the terminal and print the formatted reply.
    Search {
        /// Free-text query, matched the same way as chat searches.
        query: String,
    },
    /// Print directory statistics.
    Stats,
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

pub async fn handle_search(query: String) -> Result<()> {
    let config = load_config(None)?;
    config.validate()?;
    let components = build_bot_components(&config).await?;

    let outcome = components
        .search
        .search(&query)
        .await
        .context("Search failed")?;
    let text = components.formatter.render(&Outcome::Search { query, outcome });
    println!("{}", text);
    Ok(())
}

pub async fn handle_stats() -> Result<()> {
    let config = load_config(None)?;
    config.validate()?;
    let components = build_bot_components(&config).await?;

    let stats = components
        .search
        .stats()
        .await
        .context("Failed to read directory statistics")?;
    println!("{}", components.formatter.render(&Outcome::Stats(stats)));
    Ok(())
}
