use serde::{Deserialize, Serialize};

/// Registration steps in dialogue order. Ordering doubles as field order in collected data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    Name,
    Address,
    Phone,
    Email,
    Keywords,
}

impl RegistrationStep {
    pub const COUNT: usize = 5;

    /// 1-based position shown in prompts ("Step 3 of 5").
    pub fn number(&self) -> usize {
        match self {
            RegistrationStep::Name => 1,
            RegistrationStep::Address => 2,
            RegistrationStep::Phone => 3,
            RegistrationStep::Email => 4,
            RegistrationStep::Keywords => 5,
        }
    }

    /// None after the last step.
    pub fn next(&self) -> Option<Self> {
        match self {
            RegistrationStep::Name => Some(RegistrationStep::Address),
            RegistrationStep::Address => Some(RegistrationStep::Phone),
            RegistrationStep::Phone => Some(RegistrationStep::Email),
            RegistrationStep::Email => Some(RegistrationStep::Keywords),
            RegistrationStep::Keywords => None,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            RegistrationStep::Name => "name",
            RegistrationStep::Address => "address",
            RegistrationStep::Phone => "phone",
            RegistrationStep::Email => "email",
            RegistrationStep::Keywords => "keywords",
        }
    }
}
