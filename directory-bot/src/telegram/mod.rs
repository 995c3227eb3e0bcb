//! Telegram transport layer: message adapter, Bot implementation, REPL runner.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::TelegramMessageWrapper;
pub use bot_adapter::TelegramBotAdapter;
pub use runner::run_repl;
