//! Logs each event in before() and the response shape in after(); always continues.
//! Message text is never logged: it may carry phone numbers or emails.

use async_trait::async_trait;
use directory_core::{Handler, HandlerResponse, InboundEvent, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &InboundEvent) -> Result<bool> {
        info!(
            sender_id = %event.sender_id,
            text_len = event.text.len(),
            received_at = %event.received_at,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &InboundEvent, response: &HandlerResponse) -> Result<()> {
        let reply_len = match response {
            HandlerResponse::Reply(text) => Some(text.len()),
            _ => None,
        };
        debug!(sender_id = %event.sender_id, reply_len = ?reply_len, "Processed message");
        Ok(())
    }
}
