use anyhow::Result;
use directory_core::{init_tracing, Bot, HandlerResponse, InboundEvent};
use handler_chain::HandlerChain;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

use crate::components::{build_bot_components, build_handler_chain, BotComponents};
use crate::config::BotConfig;
use crate::telegram::run_repl;

const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60);

/// Runs one event through the chain and sends the reply, if any, back to the sender.
/// Failures are logged; nothing propagates to the transport loop.
#[instrument(skip(chain, bot, event), fields(sender_id = %event.sender_id))]
pub async fn process_event(chain: &HandlerChain, bot: &dyn Bot, event: &InboundEvent) {
    match chain.handle(event).await {
        Ok(HandlerResponse::Reply(text)) => {
            if let Err(e) = bot.send_text(&event.sender_id, &text).await {
                error!(error = %e, sender_id = %event.sender_id, "Failed to send reply");
            }
        }
        Ok(_) => {
            warn!(sender_id = %event.sender_id, "Handler chain produced no reply");
        }
        Err(e) => {
            error!(error = %e, sender_id = %event.sender_id, "Handler chain failed");
        }
    }
}

/// Drops expired sessions periodically so idle senders do not accumulate.
fn spawn_session_purge(components: &BotComponents) {
    let sessions = components.sessions.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            ticker.tick().await;
            sessions.purge_expired().await;
        }
    });
}

/// Main entry: validate config, init logging, build components, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    let token = config.base().require_bot_token()?.to_string();
    init_tracing(config.log_file())?;

    info!(
        database_url = %config.database_url(),
        session_timeout_secs = config.directory().session_timeout_secs,
        search_result_limit = config.directory().search_result_limit,
        "Initializing bot"
    );

    let components = build_bot_components(&config).await?;
    let handler_chain = build_handler_chain(&components);
    spawn_session_purge(&components);

    info!("Bot started successfully");

    run_repl(teloxide::Bot::new(token), handler_chain).await
}
