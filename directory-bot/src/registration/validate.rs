//! Per-field validators. Pure functions: text in, cleaned value or [`ValidationError`] out.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ().\-]+$").expect("Invalid regex pattern"));
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("Invalid regex pattern")
});

pub const MIN_PHONE_DIGITS: usize = 10;
pub const MAX_PHONE_DIGITS: usize = 15;

/// Word accepted at the email step to leave the email out.
pub const SKIP_EMAIL: &str = "skip";

/// User-correctable input problem. Display text names the violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the business name cannot be empty")]
    EmptyName,
    #[error("the address cannot be empty")]
    EmptyAddress,
    #[error("a phone number may only contain digits, spaces, dashes, dots, brackets and one leading +, with 10 to 15 digits")]
    InvalidPhone,
    #[error("an email must look like name@domain.com")]
    InvalidEmail,
    #[error("at least one keyword is required")]
    NoKeywords,
}

fn non_empty(input: &str, error: ValidationError) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(error)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn validate_name(input: &str) -> Result<String, ValidationError> {
    non_empty(input, ValidationError::EmptyName)
}

pub fn validate_address(input: &str) -> Result<String, ValidationError> {
    non_empty(input, ValidationError::EmptyAddress)
}

/// Returns the trimmed number as typed; separators are kept for display.
pub fn validate_phone(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if !PHONE_PATTERN.is_match(trimmed) {
        return Err(ValidationError::InvalidPhone);
    }
    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(trimmed.to_string())
}

/// `Ok(None)` when the owner sends [`SKIP_EMAIL`].
pub fn validate_email(input: &str) -> Result<Option<String>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case(SKIP_EMAIL) {
        return Ok(None);
    }
    if EMAIL_PATTERN.is_match(trimmed) {
        Ok(Some(trimmed.to_string()))
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Splits on commas and whitespace, normalizes, drops empties and repeats (first occurrence wins).
pub fn parse_keywords(input: &str) -> Result<Vec<String>, ValidationError> {
    let mut keywords: Vec<String> = Vec::new();
    for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
        let keyword = token.trim().to_lowercase();
        if !keyword.is_empty() && !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }
    if keywords.is_empty() {
        Err(ValidationError::NoKeywords)
    } else {
        Ok(keywords)
    }
}
