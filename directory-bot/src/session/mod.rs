//! Per-sender conversation state.
//!
//! [`SessionStore`] is the keyed store; [`SenderLocks`] serializes event handling per sender.

mod inmemory;
mod locks;
mod store;

pub use inmemory::InMemorySessionStore;
pub use locks::{SenderGuard, SenderLocks};
pub use store::{Flow, Session, SessionStore};
