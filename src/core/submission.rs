//! # Submission
//!
//! What happens after validation passes. The form hands a snapshot of its
//! fields to a `Submitter`; the only shipped implementation waits a fixed
//! delay and reports success. A real form provider would implement the same
//! trait, which is what keeps the failure branch in `update()` reachable.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Stand-in latency for the simulated submission.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(800);

/// Snapshot of the form taken when validation passed.
/// Edits made while the submission is in flight do not affect it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            submitted_at: Utc::now(),
        }
    }

    /// The payload a form provider would receive.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Errors a submitter can report. The user never sees these;
/// they get a fixed "try again" message and the details go to the log.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The receiving end could not be reached.
    Unreachable(String),
    /// The receiving end refused the submission.
    Rejected(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Unreachable(msg) => write!(f, "unreachable: {msg}"),
            SubmitError::Rejected(msg) => write!(f, "rejected: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

#[async_trait]
pub trait Submitter: Send + Sync {
    /// Returns the name of the submitter (for logs).
    fn name(&self) -> &str;

    /// Delivers the submission. Suspends without blocking the UI thread.
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}

/// Waits `delay`, then succeeds. Has no failure path.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    pub delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        log::debug!(
            "Simulating submission {} ({}ms)",
            submission.id,
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[test]
    fn test_default_delay_is_800ms() {
        assert_eq!(SimulatedSubmitter::default().delay, Duration::from_millis(800));
    }

    #[test]
    fn test_submission_snapshot_copies_fields() {
        let s = Submission::new("Ana", "ana@x.com", "Hello");
        assert_eq!(s.name, "Ana");
        assert_eq!(s.email, "ana@x.com");
        assert_eq!(s.message, "Hello");
        assert_ne!(s.id, Submission::new("Ana", "ana@x.com", "Hello").id);
    }

    #[test]
    fn test_submission_json_payload() {
        let s = Submission::new("Ana", "ana@x.com", "Hello");
        let value: serde_json::Value = serde_json::from_str(&s.to_json()).unwrap();
        assert_eq!(value["name"], "Ana");
        assert_eq!(value["email"], "ana@x.com");
        assert_eq!(value["message"], "Hello");
        assert_eq!(value["id"], s.id.to_string());
        assert!(value["submitted_at"].is_string());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submitter_waits_full_delay() {
        let submitter = SimulatedSubmitter::default();
        let submission = Submission::new("Ana", "ana@x.com", "Hello");

        let start = tokio::time::Instant::now();
        assert_ok!(submitter.submit(&submission).await);
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submitter_not_done_before_delay() {
        let submitter = SimulatedSubmitter::default();
        let submission = Submission::new("Ana", "ana@x.com", "Hello");

        let result = tokio::time::timeout(
            Duration::from_millis(799),
            submitter.submit(&submission),
        )
        .await;
        assert!(result.is_err(), "submission finished before the delay elapsed");
    }

    #[test]
    fn test_submit_error_display() {
        assert_eq!(
            SubmitError::Unreachable("dns".into()).to_string(),
            "unreachable: dns"
        );
        assert_eq!(
            SubmitError::Rejected("HTTP 422".into()).to_string(),
            "rejected: HTTP 422"
        );
    }
}
