//! # ContactFormView Component
//!
//! Composes the form: Name and Email side by side, the message box below,
//! the feedback lines, then the submit button.
//!
//! ```text
//! ╭ Name ─────────────╮╭ Email ────────────╮
//! │Your name          ││you@company.com    │
//! ╰───────────────────╯╰───────────────────╯
//! ╭ How can we help? ────────────────────────╮
//! │                                          │
//! ╰──────────────────────────────────────────╯
//! All fields are required.
//! ╭──────────────╮
//! │ Send message │
//! ╰──────────────╯
//! ```
//!
//! The view owns focus and the child components. Values, status and error
//! come from the `ContactForm` record through `sync()`; edits and submit
//! requests go back out as `FormEvent`s for the reducer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{ContactForm, Field};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use super::feedback::Feedback;
use super::submit_button::SubmitButton;
use super::text_field::{TextField, TextFieldEvent};

/// Where keyboard input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Email,
    Message,
    Button,
}

impl Focus {
    /// Tab order.
    pub const ALL: [Focus; 4] = [Focus::Name, Focus::Email, Focus::Message, Focus::Button];

    /// Advance to the next stop (wraps).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Go back to the previous stop (wraps).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        let len = Self::ALL.len();
        Self::ALL[(idx + len - 1) % len]
    }

    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Name => Some(Field::Name),
            Focus::Email => Some(Field::Email),
            Focus::Message => Some(Field::Message),
            Focus::Button => None,
        }
    }
}

/// High-level events emitted by the form view
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Edited { field: Field, value: String },
    /// The (enabled) submit control was pressed.
    Submit,
}

pub struct ContactFormView {
    pub focus: Focus,
    name: TextField,
    email: TextField,
    message: TextField,
    button: SubmitButton,
    feedback: Feedback,
}

impl ContactFormView {
    pub fn new() -> Self {
        let mut view = Self {
            focus: Focus::Name,
            name: TextField::new(Field::Name),
            email: TextField::new(Field::Email),
            message: TextField::new(Field::Message),
            button: SubmitButton::new(),
            feedback: Feedback::default(),
        };
        view.apply_focus();
        view
    }

    /// Pull props from the form record. Call before every draw and after
    /// every update so the children never show stale values.
    pub fn sync(&mut self, form: &ContactForm) {
        self.name.sync_value(&form.name);
        self.email.sync_value(&form.email);
        self.message.sync_value(&form.message);
        self.button.sync(form);
        self.feedback.sync(form);
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.apply_focus();
    }

    fn apply_focus(&mut self) {
        self.name.focused = self.focus == Focus::Name;
        self.email.focused = self.focus == Focus::Email;
        self.message.focused = self.focus == Focus::Message;
        self.button.focused = self.focus == Focus::Button;
    }

    fn text_field_mut(&mut self, field: Field) -> &mut TextField {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Route a submit request through the button so a disabled button blocks it.
    fn press_submit(&self) -> Option<FormEvent> {
        self.button.press().map(|_| FormEvent::Submit)
    }
}

impl Default for ContactFormView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ContactFormView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min, Percentage};

        let feedback_height = self.feedback.height(area.width);
        let [top_row, message_area, feedback_area, button_area, _rest] = Layout::vertical([
            Length(self.name.height()),
            Length(self.message.height()),
            Length(feedback_height),
            Length(3),
            Min(0),
        ])
        .spacing(1)
        .areas(area);

        let [name_area, email_area] =
            Layout::horizontal([Percentage(50), Percentage(50)]).spacing(1).areas(top_row);

        // Only the focused field places the terminal cursor.
        self.name.render(frame, name_area);
        self.email.render(frame, email_area);
        self.message.render(frame, message_area);

        if feedback_height > 0 {
            self.feedback.render(frame, feedback_area);
        }
        self.button.render(frame, button_area);
    }
}

impl EventHandler for ContactFormView {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::NextField => {
                self.set_focus(self.focus.next());
                None
            }
            TuiEvent::PrevField => {
                self.set_focus(self.focus.prev());
                None
            }
            TuiEvent::Submit => self.press_submit(),
            _ => match self.focus.field() {
                Some(field) => match self.text_field_mut(field).handle_event(event)? {
                    TextFieldEvent::Changed(value) => Some(FormEvent::Edited { field, value }),
                    TextFieldEvent::Submit => self.press_submit(),
                    TextFieldEvent::CursorMoved => None,
                },
                None => self.button.handle_event(event).map(|_| FormEvent::Submit),
            },
        }
    }
}
