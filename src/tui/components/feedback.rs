//! # Feedback Component
//!
//! Status-dependent lines under the form: the error message (red) when one
//! is present and the thank-you notice (green) after a successful submission.
//! The two are independent; both can show at once only if the form record
//! says so.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::state::{ContactForm, SUCCESS_NOTICE};
use crate::tui::component::Component;

#[derive(Default)]
pub struct Feedback {
    pub error: Option<String>,
    pub success: bool,
}

impl Feedback {
    pub fn sync(&mut self, form: &ContactForm) {
        self.error = form.error.clone();
        self.success = form.show_success();
    }

    fn messages(&self) -> Vec<(&str, Color)> {
        let mut messages = Vec::new();
        if let Some(error) = &self.error {
            messages.push((error.as_str(), Color::Red));
        }
        if self.success {
            messages.push((SUCCESS_NOTICE, Color::Green));
        }
        messages
    }

    /// Rows needed at `width` once each message wraps; 0 when there is nothing to show.
    pub fn height(&self, width: u16) -> u16 {
        let messages = self.messages();
        if width == 0 {
            return messages.len() as u16;
        }
        messages
            .iter()
            .map(|(text, _)| textwrap::wrap(text, width as usize).len().max(1))
            .sum::<usize>() as u16
    }
}

impl Component for Feedback {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .messages()
            .into_iter()
            .map(|(text, color)| Line::styled(text, Style::default().fg(color)))
            .collect();
        if lines.is_empty() {
            return;
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }
}
