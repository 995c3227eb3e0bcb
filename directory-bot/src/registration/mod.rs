//! Five-step business registration dialogue.
//!
//! [`RegistrationState`] is pure data; [`RegistrationState::on_message`] computes the next
//! [`Transition`] without touching any store. The dispatcher applies the transition.

mod flow;
mod step;
pub mod validate;

pub use flow::{CompletedRegistration, RegistrationState, Transition};
pub use step::RegistrationStep;
pub use validate::ValidationError;
