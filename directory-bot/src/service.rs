//! Dispatcher: one inbound event in, one [`Outcome`] out.
//!
//! Holds the sender's lock for the whole event so session reads and writes for one sender never
//! interleave. Store failures come back as `DirectoryError::StoreUnavailable`.

use chrono::{DateTime, Utc};
use directory_core::{Clock, InboundEvent, Result};
use std::sync::Arc;
use std::time::Duration;
use storage::RecordStore;
use tracing::{error, info, instrument, warn};

use crate::bounded::bounded;
use crate::command::{classify, Command, Input};
use crate::outcome::Outcome;
use crate::registration::Transition;
use crate::search::SearchEngine;
use crate::session::{SenderLocks, Session, SessionStore};

#[derive(Clone)]
pub struct DirectoryService {
    sessions: Arc<dyn SessionStore>,
    records: Arc<dyn RecordStore>,
    search: SearchEngine,
    clock: Arc<dyn Clock>,
    locks: SenderLocks,
    store_timeout: Duration,
}

impl DirectoryService {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        records: Arc<dyn RecordStore>,
        search: SearchEngine,
        clock: Arc<dyn Clock>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            sessions,
            records,
            search,
            clock,
            locks: SenderLocks::new(),
            store_timeout,
        }
    }

    #[instrument(skip(self, event), fields(sender_id = %event.sender_id))]
    pub async fn dispatch(&self, event: &InboundEvent) -> Result<Outcome> {
        let _guard = self.locks.acquire(&event.sender_id).await;

        let input = classify(&event.text);
        if input == Input::Empty {
            return Ok(Outcome::Welcome);
        }

        let session = bounded(self.store_timeout, "session_get", self.sessions.get(&event.sender_id)).await?;
        if let Some(session) = session.filter(Session::is_active) {
            return self.continue_registration(session, event).await;
        }

        match input {
            Input::Empty => Ok(Outcome::Welcome),
            Input::Command(Command::Register) => self.start_registration(&event.sender_id).await,
            Input::Command(Command::Help) => Ok(Outcome::Help),
            Input::Command(Command::Contact) => Ok(Outcome::Contact),
            Input::Command(Command::Cancel) => {
                info!(sender_id = %event.sender_id, "cancel without active registration");
                Ok(Outcome::NothingToCancel)
            }
            Input::Command(Command::Stats) => Ok(Outcome::Stats(self.search.stats().await?)),
            Input::Near(location) => {
                let outcome = self.search.search_near(&location).await?;
                Ok(Outcome::Near { location, outcome })
            }
            Input::Search(query) => {
                let outcome = self.search.search(&query).await?;
                Ok(Outcome::Search { query, outcome })
            }
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    async fn put(&self, session: Session) -> Result<()> {
        bounded(self.store_timeout, "session_put", self.sessions.put(session)).await
    }

    async fn delete(&self, sender_id: &str) -> Result<()> {
        bounded(self.store_timeout, "session_delete", self.sessions.delete(sender_id)).await
    }

    async fn start_registration(&self, sender_id: &str) -> Result<Outcome> {
        self.put(Session::registration(sender_id, self.now())).await?;
        info!(sender_id = %sender_id, "step: registration started");
        Ok(Outcome::RegistrationStarted)
    }

    async fn continue_registration(&self, mut session: Session, event: &InboundEvent) -> Result<Outcome> {
        let sender_id = event.sender_id.as_str();
        let state = match session.registration_state() {
            Some(state) => state.clone(),
            None => return Ok(Outcome::Fallback),
        };

        match state.on_message(&event.text) {
            Transition::Reprompt(step) => {
                session.touch(self.now());
                self.put(session).await?;
                Ok(Outcome::Prompt(step))
            }
            Transition::Cancel => {
                self.delete(sender_id).await?;
                info!(sender_id = %sender_id, step = ?state.step, "step: registration cancelled");
                Ok(Outcome::Cancelled)
            }
            Transition::Advance { state: next_state, accepted } => {
                let completed = state.step;
                let next = next_state.step;
                session.update(next_state, self.now());
                self.put(session).await?;
                info!(sender_id = %sender_id, completed = ?completed, next = ?next, "step: registration advanced");
                Ok(Outcome::StepAccepted {
                    completed,
                    accepted,
                    next,
                })
            }
            Transition::Rejected { step, error } => {
                session.touch(self.now());
                self.put(session).await?;
                info!(sender_id = %sender_id, step = ?step, text_len = event.text.len(), "step: registration input rejected");
                Ok(Outcome::Invalid { step, error })
            }
            Transition::Complete(done) => {
                let business = done.into_new_business(sender_id, self.now());
                match bounded(self.store_timeout, "record_create", self.records.create(&business)).await {
                    Ok(id) => {
                        // The record exists now; a failed session delete must not turn into a false error.
                        if let Err(e) = self.delete(sender_id).await {
                            error!(sender_id = %sender_id, error = %e, "Failed to clear session after registration");
                        }
                        info!(sender_id = %sender_id, id, keyword_count = business.keywords.len(), "step: registration complete");
                        Ok(Outcome::Registered { id, business })
                    }
                    Err(e) => {
                        error!(sender_id = %sender_id, error = %e, "Registration persist failed, session kept");
                        Ok(Outcome::RegistrationFailed)
                    }
                }
            }
            Transition::Conflict => {
                warn!(sender_id = %sender_id, step = ?state.step, "Registration state conflict, session reset");
                self.delete(sender_id).await?;
                Ok(Outcome::Fallback)
            }
        }
    }
}
