//! # SubmitButton Component
//!
//! The form's submit control. Disabled exactly while a submission is in
//! flight; a disabled button swallows presses, which is the only thing that
//! stops a double submission.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::state::ContactForm;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed,
}

/// # Props
///
/// - `label`: "Send message" or "Sending…"
/// - `disabled`: true while submitting
/// - `focused`: whether Enter/Space on it presses it
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
    pub focused: bool,
}

impl SubmitButton {
    pub fn new() -> Self {
        let form = ContactForm::new();
        Self {
            label: form.submit_label(),
            disabled: form.submit_disabled(),
            focused: false,
        }
    }

    /// Copy the button props from the form record.
    pub fn sync(&mut self, form: &ContactForm) {
        self.label = form.submit_label();
        self.disabled = form.submit_disabled();
    }

    /// Press the button. Returns `None` while disabled.
    pub fn press(&self) -> Option<ButtonEvent> {
        if self.disabled {
            log::debug!("Ignoring press on disabled submit button");
            return None;
        }
        Some(ButtonEvent::Pressed)
    }

    /// Width needed for the label plus borders and padding.
    pub fn width(&self) -> u16 {
        self.label.width() as u16 + 6
    }
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.disabled {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        };

        let border_style = if self.focused && !self.disabled {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let button = Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            );

        let width = self.width().min(area.width);
        frame.render_widget(button, Rect { width, ..area });
    }
}

impl EventHandler for SubmitButton {
    type Event = ButtonEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Enter | TuiEvent::InputChar(' ') if self.focused => self.press(),
            TuiEvent::Submit => self.press(),
            _ => None,
        }
    }
}
