//! REPL runner: converts teloxide messages to [`InboundEvent`]s and passes them to the chain.

use anyhow::Result;
use directory_core::{Bot as CoreBot, ToInboundEvent};
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{info, instrument};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;
use crate::runner::process_event;

/// Starts the REPL. Each text message is processed to completion before the handler returns;
/// teloxide runs different chats concurrently and one chat's messages in arrival order.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Connected to Telegram");
        }
    }

    let sender: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();
        let sender = sender.clone();

        async move {
            match TelegramMessageWrapper(&msg).to_event() {
                Some(event) => process_event(&chain, sender.as_ref(), &event).await,
                None => {
                    info!(chat_id = msg.chat.id.0, "Ignoring non-text message");
                }
            }
            Ok(())
        }
    })
    .await;

    Ok(())
}
