//! # Validation
//!
//! Minimal client-side checks run at the start of every submit attempt.
//! Rules are applied in order and stop at the first failure:
//!
//! 1. every field must be non-empty after trimming whitespace
//! 2. the email must contain an `@` (no further format check)
//!
//! Trimming is only used for the emptiness check; values are never rewritten.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one of name, email, message is blank.
    MissingField,
    /// The email has no `@`.
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField => write!(f, "All fields are required."),
            ValidationError::InvalidEmail => write!(f, "Enter a valid email address."),
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn validate(name: &str, email: &str, message: &str) -> Result<(), ValidationError> {
    if [name, email, message].iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::MissingField);
    }

    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
