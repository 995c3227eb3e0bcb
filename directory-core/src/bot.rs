//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; the Telegram adapter in directory-bot implements it via teloxide.

use crate::error::Result;
use async_trait::async_trait;

/// Sends reply text back to a sender. Implementations map `sender_id` to a transport address.
#[async_trait]
pub trait Bot: Send + Sync {
    async fn send_text(&self, sender_id: &str, text: &str) -> Result<()>;
}
