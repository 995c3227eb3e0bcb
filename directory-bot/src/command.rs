//! Input normalization and command classification.
//!
//! Every inbound text is classified exactly once into [`Input`]; the dispatcher matches on it.

/// Literal commands, matched case-insensitively after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Register,
    Help,
    Contact,
    Cancel,
    Stats,
}

impl Command {
    fn from_normalized(text: &str) -> Option<Self> {
        match text {
            "register" => Some(Command::Register),
            "help" | "start" | "menu" => Some(Command::Help),
            "contact" => Some(Command::Contact),
            "cancel" => Some(Command::Cancel),
            "stats" => Some(Command::Stats),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Nothing left after trimming.
    Empty,
    Command(Command),
    /// `near <location>`; location is normalized and non-empty.
    Near(String),
    /// Free text, normalized.
    Search(String),
}

/// Trims and case-folds `text`. Comparison form only; never shown to users.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

pub fn classify(text: &str) -> Input {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Input::Empty;
    }
    if let Some(command) = Command::from_normalized(&normalized) {
        return Input::Command(command);
    }
    if let Some(rest) = normalized.strip_prefix("near ") {
        let location = rest.trim();
        if !location.is_empty() {
            return Input::Near(location.to_string());
        }
    }
    Input::Search(normalized)
}
