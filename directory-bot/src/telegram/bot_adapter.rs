//! Wraps teloxide::Bot and implements [`directory_core::Bot`]. Tests substitute another Bot impl.

use async_trait::async_trait;
use directory_core::{Bot as CoreBot, DirectoryError, Result};
use teloxide::prelude::*;

use super::adapters::chat_id;

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_text(&self, sender_id: &str, text: &str) -> Result<()> {
        let chat = chat_id(sender_id)
            .ok_or_else(|| DirectoryError::Bot(format!("Invalid sender id for Telegram: {}", sender_id)))?;
        self.bot
            .send_message(chat, text.to_string())
            .await
            .map_err(|e| DirectoryError::Bot(e.to_string()))?;
        Ok(())
    }
}
