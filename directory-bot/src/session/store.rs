//! Session model and storage trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::registration::RegistrationState;
use directory_core::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "flow", rename_all = "snake_case")]
pub enum Flow {
    None,
    Registration(RegistrationState),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub sender_id: String,
    pub flow: Flow,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// A fresh registration session at the first step.
    pub fn registration(sender_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            sender_id: sender_id.to_string(),
            flow: Flow::Registration(RegistrationState::new()),
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.flow, Flow::None)
    }

    pub fn registration_state(&self) -> Option<&RegistrationState> {
        match &self.flow {
            Flow::Registration(state) => Some(state),
            Flow::None => None,
        }
    }

    /// Replaces the registration state and marks activity.
    pub fn update(&mut self, state: RegistrationState, now: DateTime<Utc>) {
        self.flow = Flow::Registration(state);
        self.updated_at = now;
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// Keyed session storage. Implementations must never return a session whose `updated_at` is
/// older than their inactivity window; such sessions are dropped on read.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, sender_id: &str) -> Result<Option<Session>>;
    async fn put(&self, session: Session) -> Result<()>;
    async fn delete(&self, sender_id: &str) -> Result<()>;
}
