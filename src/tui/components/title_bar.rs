//! # TitleBar Component
//!
//! Single top line showing the form title, the current submission status,
//! and the key hints.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives the status as a prop and
//! has no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(form.status);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Idle**: `"Contact | Tab: next field · Ctrl+S: send · Esc: quit"`
//! 2. **Otherwise**: `"Contact (submitting) | Tab: next field · ..."`

use crate::core::state::Status;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const KEY_HINTS: &str = "Tab: next field · Ctrl+S: send · Esc: quit";

pub struct TitleBar {
    /// Current submission status
    pub status: Status,
}

impl TitleBar {
    pub fn new(status: Status) -> Self {
        Self { status }
    }

    fn title_text(&self) -> String {
        match self.status {
            Status::Idle => "Contact".to_string(),
            other => format!("Contact ({})", other.label()),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let status_color = match self.status {
            Status::Idle => Color::Gray,
            Status::Submitting => Color::Yellow,
            Status::Success => Color::Green,
            Status::Error => Color::Red,
        };

        let line = Line::from(vec![
            Span::styled(
                self.title_text(),
                Style::default().fg(status_color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_idle_title_has_no_status() {
        let text = rendered(&mut TitleBar::new(Status::Idle));
        assert!(text.contains("Contact |"));
        assert!(!text.contains("idle"));
        assert!(text.contains("Ctrl+S: send"));
    }

    #[test]
    fn test_title_shows_status() {
        let text = rendered(&mut TitleBar::new(Status::Submitting));
        assert!(text.contains("Contact (submitting)"));
    }

    #[test]
    fn test_title_bar_props_are_mutable() {
        let mut title_bar = TitleBar::new(Status::Idle);
        title_bar.status = Status::Success;
        assert!(rendered(&mut title_bar).contains("Contact (success)"));
    }
}
