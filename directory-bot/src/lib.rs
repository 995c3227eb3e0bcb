//! # Business directory bot
//!
//! Conversational directory over a chat channel: owners register a business in five guided steps,
//! anyone else searches by keyword or location. Wires directory-core, handler-chain and storage,
//! loads config from env and runs the Telegram REPL.

pub mod bounded;
pub mod cli;
pub mod command;
pub mod components;
pub mod config;
pub mod format;
pub mod handlers;
pub mod outcome;
pub mod registration;
pub mod runner;
pub mod search;
pub mod service;
pub mod session;
pub mod telegram;

pub use cli::{handle_search, handle_stats, load_config, Cli, Commands};
pub use command::{classify, normalize, Command, Input};
pub use components::{build_bot_components, build_components, build_handler_chain, BotComponents};
pub use config::{BaseConfig, BotConfig, DirectoryConfig};
pub use format::ResponseFormatter;
pub use handlers::{DirectoryHandler, LoggingHandler};
pub use outcome::Outcome;
pub use registration::{CompletedRegistration, RegistrationState, RegistrationStep, Transition, ValidationError};
pub use runner::{process_event, run_bot};
pub use search::{SearchEngine, SearchOutcome};
pub use service::DirectoryService;
pub use session::{InMemorySessionStore, SenderLocks, Session, SessionStore};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper};
