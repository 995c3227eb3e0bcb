//! Base config: Telegram connection, logging, database. Loaded from env.

use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN; only `run` needs it.
    pub bot_token: Option<String>,
    /// DATABASE_URL
    pub database_url: String,
    /// LOG_FILE
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var("BOT_TOKEN").ok())
            .filter(|t| !t.trim().is_empty());
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://./business_directory.db".to_string());
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/directory-bot.log".to_string());

        Ok(Self {
            bot_token,
            database_url,
            log_file,
        })
    }

    pub fn require_bot_token(&self) -> Result<&str> {
        self.bot_token
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("BOT_TOKEN not set (set it in .env or pass --token)"))
    }
}
