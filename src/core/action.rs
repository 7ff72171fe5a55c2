//! # Actions
//!
//! Everything that can happen to the form becomes an `Action`.
//! User types in the email box? That's `Action::EditField { field: Email, .. }`.
//! The submitter finishes? That's `Action::SubmissionSucceeded { id }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what I/O to perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};
use uuid::Uuid;

use crate::core::state::{ContactForm, Field, Status};
use crate::core::submission::{SubmitError, Submission};
use crate::core::validation::validate;

/// Shown when a submitter reports failure. Details go to the log only.
pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Overwrite a field verbatim.
    EditField { field: Field, value: String },
    /// Validate and, if valid, start a submission.
    Submit,
    SubmissionSucceeded { id: Uuid },
    SubmissionFailed { id: Uuid, error: SubmitError },
    Quit,
}

/// I/O the adapter must perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Run the submitter on this snapshot and report back.
    SpawnSubmission(Submission),
    Quit,
}

pub fn update(form: &mut ContactForm, action: Action) -> Effect {
    match action {
        Action::EditField { field, value } => {
            *form.value_mut(field) = value;
            Effect::None
        }
        Action::Submit => {
            form.error = None;

            if let Err(e) = validate(&form.name, &form.email, &form.message) {
                info!("Submit rejected by validation: {}", e);
                form.error = Some(e.to_string());
                return Effect::None;
            }

            // No guard against a submission already in flight; the adapter
            // only stops this by disabling the submit control.
            if form.status == Status::Submitting {
                warn!("Submit received while a submission is already in flight");
            }

            form.status = Status::Submitting;
            let submission = Submission::new(&form.name, &form.email, &form.message);
            info!("Submission {} accepted", submission.id);
            Effect::SpawnSubmission(submission)
        }
        Action::SubmissionSucceeded { id } => {
            info!("Submission {} succeeded", id);
            form.status = Status::Success;
            form.clear_fields();
            Effect::None
        }
        Action::SubmissionFailed { id, error } => {
            warn!("Submission {} failed: {}", id, error);
            form.status = Status::Error;
            form.error = Some(SUBMIT_FAILED_MESSAGE.to_string());
            Effect::None
        }
        Action::Quit => {
            debug!("Quit requested (status: {})", form.status.label());
            Effect::Quit
        }
    }
}
