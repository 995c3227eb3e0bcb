//! # directory-core
//!
//! Core types and traits for the business directory bot: [`InboundEvent`], [`Handler`], [`Bot`],
//! [`Clock`], the shared error type, and tracing initialization. Transport-agnostic; used by
//! handler-chain and directory-bot.

pub mod bot;
pub mod clock;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{DirectoryError, Result};
pub use logger::init_tracing;
pub use types::{Handler, HandlerResponse, InboundEvent, ToInboundEvent};
