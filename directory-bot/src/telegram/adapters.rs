use directory_core::{InboundEvent, ToInboundEvent};

/// Converts a Telegram message into an [`InboundEvent`]. The chat id is the sender identity,
/// so replies go back to the same chat.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToInboundEvent for TelegramMessageWrapper<'a> {
    fn to_event(&self) -> Option<InboundEvent> {
        let text = self.0.text()?;
        Some(InboundEvent::new(
            self.0.chat.id.0.to_string(),
            text,
            self.0.date,
        ))
    }
}

/// Parses a sender id produced by [`TelegramMessageWrapper`] back into a chat id.
pub(crate) fn chat_id(sender_id: &str) -> Option<teloxide::types::ChatId> {
    sender_id.trim().parse::<i64>().ok().map(teloxide::types::ChatId)
}
