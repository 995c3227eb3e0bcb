use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use storage::NewBusiness;

use super::step::RegistrationStep;
use super::validate::{
    parse_keywords, validate_address, validate_email, validate_name, validate_phone,
    ValidationError,
};
use crate::command::{classify, Command, Input};

/// Progress through the dialogue: the step awaiting input and the values accepted so far.
/// Values stay provisional until every step has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationState {
    pub step: RegistrationStep,
    pub collected: BTreeMap<RegistrationStep, String>,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of feeding one message to a [`RegistrationState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// `register` mid-flow: ask the current step again, nothing changes.
    Reprompt(RegistrationStep),
    /// `cancel`: discard everything.
    Cancel,
    /// Input accepted; `state` is the new state, `accepted` the stored value.
    Advance {
        state: RegistrationState,
        accepted: String,
    },
    /// Input rejected; state unchanged.
    Rejected {
        step: RegistrationStep,
        error: ValidationError,
    },
    /// Last step accepted; ready to persist.
    Complete(CompletedRegistration),
    /// Collected data is inconsistent with the step (e.g. a field went missing).
    Conflict,
}

/// All five steps validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedRegistration {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub keywords: Vec<String>,
}

impl CompletedRegistration {
    pub fn into_new_business(self, registered_by: &str, registered_at: DateTime<Utc>) -> NewBusiness {
        NewBusiness {
            name: self.name,
            address: Some(self.address),
            phone: Some(self.phone),
            email: self.email,
            keywords: self.keywords,
            registered_by: registered_by.to_string(),
            registered_at,
        }
    }
}

impl RegistrationState {
    pub fn new() -> Self {
        Self {
            step: RegistrationStep::Name,
            collected: BTreeMap::new(),
        }
    }

    pub fn value(&self, step: RegistrationStep) -> Option<&str> {
        self.collected.get(&step).map(String::as_str)
    }

    pub fn on_message(&self, text: &str) -> Transition {
        match classify(text) {
            Input::Command(Command::Register) => return Transition::Reprompt(self.step),
            Input::Command(Command::Cancel) => return Transition::Cancel,
            _ => {}
        }

        let validated = match self.step {
            RegistrationStep::Name => validate_name(text),
            RegistrationStep::Address => validate_address(text),
            RegistrationStep::Phone => validate_phone(text),
            // An empty value records that the email was skipped.
            RegistrationStep::Email => validate_email(text).map(Option::unwrap_or_default),
            RegistrationStep::Keywords => return self.complete(text),
        };

        match validated {
            Ok(accepted) => {
                let mut state = self.clone();
                state.collected.insert(self.step, accepted.clone());
                match self.step.next() {
                    Some(next) => {
                        state.step = next;
                        Transition::Advance { state, accepted }
                    }
                    None => Transition::Conflict,
                }
            }
            Err(error) => Transition::Rejected {
                step: self.step,
                error,
            },
        }
    }

    fn complete(&self, text: &str) -> Transition {
        let keywords = match parse_keywords(text) {
            Ok(keywords) => keywords,
            Err(error) => {
                return Transition::Rejected {
                    step: self.step,
                    error,
                }
            }
        };

        let field = |step| self.value(step).map(str::to_string);
        match (
            field(RegistrationStep::Name),
            field(RegistrationStep::Address),
            field(RegistrationStep::Phone),
            field(RegistrationStep::Email),
        ) {
            (Some(name), Some(address), Some(phone), Some(email)) => {
                Transition::Complete(CompletedRegistration {
                    name,
                    address,
                    phone,
                    email: (!email.is_empty()).then_some(email),
                    keywords,
                })
            }
            _ => Transition::Conflict,
        }
    }
}
