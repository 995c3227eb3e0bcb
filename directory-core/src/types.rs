//! Core types: inbound event, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One message received from the channel. `sender_id` is opaque (not a verified account).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    pub sender_id: String,
    pub text: String,
    pub received_at: DateTime<Utc>,
}

impl InboundEvent {
    pub fn new(sender_id: impl Into<String>, text: impl Into<String>, received_at: DateTime<Utc>) -> Self {
        Self {
            sender_id: sender_id.into(),
            text: text.into(),
            received_at,
        }
    }
}

/// Handler result for the chain. `Reply(text)` carries the outbound reply so later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no reply.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and send this text back to the sender.
    Reply(String),
}

/// Converts a transport-specific message type to an [`InboundEvent`]. Returns None for messages without text.
pub trait ToInboundEvent: Send + Sync {
    fn to_event(&self) -> Option<InboundEvent>;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _event: &InboundEvent) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the event. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _event: &InboundEvent) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _event: &InboundEvent,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
