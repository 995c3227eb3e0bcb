//! Bot configuration: BaseConfig (channel + log + DB) + DirectoryConfig (session, search, store policy).

mod base;
mod bot_config;
mod directory;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use directory::{DirectoryConfig, MAX_SESSION_TIMEOUT_SECS};
