use crate::core::state::ContactForm;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::TitleBar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Widest the form grows; wider terminals get side margins.
const MAX_FORM_WIDTH: u16 = 96;

pub fn draw_ui(frame: &mut Frame, form: &ContactForm, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    TitleBar::new(form.status).render(frame, title_area);

    let [form_area] = Layout::horizontal([Constraint::Max(MAX_FORM_WIDTH)])
        .flex(ratatui::layout::Flex::Center)
        .areas(main_area.inner(ratatui::layout::Margin::new(1, 1)));

    tui.form_view.sync(form);
    tui.form_view.render(frame, form_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Status;
    use crate::test_support::filled_form;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(form: &ContactForm) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| {
                draw_ui(f, form, &mut tui);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_idle() {
        let text = draw(&ContactForm::new());
        assert!(text.contains("Contact |"));
        assert!(text.contains("Send message"));
    }

    #[test]
    fn test_draw_ui_submitting() {
        let text = draw(&ContactForm { status: Status::Submitting, ..filled_form() });
        assert!(text.contains("Contact (submitting)"));
        assert!(text.contains("Sending…"));
        assert!(text.contains("Hello"));
    }

    #[test]
    fn test_draw_ui_tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| draw_ui(f, &filled_form(), &mut tui))
            .unwrap();
    }
}
