//! What the dispatcher decided for one event. Rendered to text by [`crate::format::ResponseFormatter`].

use storage::{DirectoryStats, NewBusiness};

use crate::registration::{RegistrationStep, ValidationError};
use crate::search::SearchOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Empty message: usage hint.
    Welcome,
    Help,
    Contact,
    /// `cancel` with no registration in progress.
    NothingToCancel,
    /// Session created at the first step.
    RegistrationStarted,
    /// `register` while a session is active: same prompt again.
    Prompt(RegistrationStep),
    StepAccepted {
        completed: RegistrationStep,
        accepted: String,
        next: RegistrationStep,
    },
    Invalid {
        step: RegistrationStep,
        error: ValidationError,
    },
    Cancelled,
    Registered {
        id: i64,
        business: NewBusiness,
    },
    /// Final persist failed; session kept at the keywords step.
    RegistrationFailed,
    Search {
        query: String,
        outcome: SearchOutcome,
    },
    Near {
        location: String,
        outcome: SearchOutcome,
    },
    Stats(DirectoryStats),
    /// State did not match the input; answer with help instead of failing.
    Fallback,
}
