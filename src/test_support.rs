//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::state::ContactForm;
use crate::core::submission::{SubmitError, Submission, Submitter};

/// A submitter whose endpoint is never reachable. Exercises the failure branch
/// the simulated submitter can't reach.
pub struct FailingSubmitter;

#[async_trait]
impl Submitter for FailingSubmitter {
    fn name(&self) -> &str {
        "failing"
    }

    async fn submit(&self, _submission: &Submission) -> Result<(), SubmitError> {
        Err(SubmitError::Unreachable("connection refused".to_string()))
    }
}

/// A form that passes validation: "Ana" / "ana@x.com" / "Hello".
pub fn filled_form() -> ContactForm {
    ContactForm {
        name: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        message: "Hello".to_string(),
        ..Default::default()
    }
}
