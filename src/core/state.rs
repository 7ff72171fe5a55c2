//! # Form State
//!
//! The whole component state in one record. No TUI types here;
//! presentation state (focus, cursor positions) lives in the `tui` module.
//!
//! ```text
//! ContactForm
//! ├── name: String            // free-form, trimmed only for validation
//! ├── email: String           // valid iff it contains '@'
//! ├── message: String         // free-form, may span lines
//! ├── status: Status          // idle | submitting | success | error
//! └── error: Option<String>   // last validation or submission error
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

/// Submission status. Drives the submit button and the feedback lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Submitting => "submitting",
            Status::Success => "success",
            Status::Error => "error",
        }
    }
}

/// One of the three user-editable text values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "How can we help?",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "you@company.com",
            Field::Message => "Tell us about your project, timeline, and goals.",
        }
    }

    /// Only the message field accepts newlines.
    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::Message)
    }
}

pub const SUBMIT_LABEL: &str = "Send message";
pub const SUBMITTING_LABEL: &str = "Sending…";
pub const SUCCESS_NOTICE: &str = "Thanks. We’ll get back to you shortly.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: Status,
    pub error: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub(crate) fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Empties all three text fields. Status and error are left alone.
    pub(crate) fn clear_fields(&mut self) {
        for field in Field::ALL {
            self.value_mut(field).clear();
        }
    }

    /// The submit control is disabled exactly while a submission is in flight.
    pub fn submit_disabled(&self) -> bool {
        self.status == Status::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submit_disabled() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn show_success(&self) -> bool {
        self.status == Status::Success
    }
}
