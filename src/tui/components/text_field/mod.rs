//! # TextField Component
//!
//! A bordered, labelled text input bound to one form field.
//!
//! ## Responsibilities
//!
//! - Capture text input (chars, paste)
//! - Handle editing (backspace, delete, cursor and word movement)
//! - Single-line fields turn Enter into a submit request; the message field
//!   inserts a newline instead
//! - Display the placeholder while empty and a highlighted border while focused
//!
//! ## State Management
//!
//! The form record owns the value. The field keeps an editing buffer that is
//! re-synced from the record before every draw (`sync_value`), so a reset
//! after a successful submission shows up here without any extra wiring.
//! Cursor position and scroll state are encapsulated in `CursorState`.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::state::Field;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    VERTICAL_OVERHEAD, inner_width, next_char_boundary, next_word_boundary, prev_char_boundary,
    prev_word_boundary, wrap_line_count, wrapped_lines,
};

/// Content rows shown by the message field before it scrolls.
pub const MULTILINE_ROWS: u16 = 5;

/// High-level events emitted by a TextField
#[derive(Debug, Clone, PartialEq)]
pub enum TextFieldEvent {
    /// The value changed; carries the full new value.
    Changed(String),
    /// Enter pressed in a single-line field.
    Submit,
    /// Only the cursor moved.
    CursorMoved,
}

/// Text input bound to one `Field`.
///
/// # Props
///
/// - `field`: which form field this edits (label, placeholder, line mode)
/// - `focused`: whether keyboard input is routed here
///
/// # State
///
/// - `buffer`: mirror of the field's value
/// - `cursor`: cursor position, scroll offset, and cached width
pub struct TextField {
    pub field: Field,
    pub focused: bool,
    buffer: String,
    cursor: CursorState,
}

impl TextField {
    pub fn new(field: Field) -> Self {
        let rows = if field.is_multiline() { MULTILINE_ROWS } else { 1 };
        Self {
            field,
            focused: false,
            buffer: String::new(),
            cursor: CursorState::new(rows),
        }
    }

    /// Replace the buffer with the form's value if they differ.
    pub fn sync_value(&mut self, value: &str) {
        if self.buffer != value {
            self.buffer = value.to_string();
            self.cursor.move_to_end(&self.buffer);
        }
    }

    /// Fixed height: content rows plus borders.
    pub fn height(&self) -> u16 {
        self.cursor.visible_lines + VERTICAL_OVERHEAD
    }

    fn changed(&self) -> Option<TextFieldEvent> {
        Some(TextFieldEvent::Changed(self.buffer.clone()))
    }

    fn insert_str(&mut self, text: &str) -> Option<TextFieldEvent> {
        let text = if self.field.is_multiline() {
            text.replace("\r\n", "\n")
        } else {
            // Single-line inputs drop line breaks from pasted text
            text.replace(['\r', '\n'], "")
        };
        if text.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor.pos, &text);
        self.cursor.pos += text.len();
        self.changed()
    }

    fn move_to(&mut self, pos: usize) -> Option<TextFieldEvent> {
        (self.cursor.pos != pos).then(|| {
            self.cursor.pos = pos;
            TextFieldEvent::CursorMoved
        })
    }

    /// Visible slice of the wrapped buffer.
    fn visible_lines(&self, content_width: u16) -> Vec<String> {
        let lines = wrapped_lines(&self.buffer, inner_width(content_width));
        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + self.cursor.visible_lines as usize).min(lines.len());
        lines[start..end].to_vec()
    }

    /// Render scrollbar when content exceeds visible area
    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        let total_lines = wrap_line_count(&self.buffer, inner_width(area.width));
        if total_lines <= self.cursor.visible_lines {
            return;
        }

        // ScrollbarState content_length is max scrollable position, not total items
        let max_scroll = total_lines.saturating_sub(self.cursor.visible_lines);

        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll as usize)
            .position(self.cursor.scroll_offset as usize);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_content_width = area.width;
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::styled(
                self.field.label(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            ));

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.field.placeholder()).style(Style::default().fg(Color::DarkGray))
        } else {
            let lines: Vec<Line> = self.visible_lines(area.width).into_iter().map(Line::from).collect();
            Paragraph::new(lines).style(Style::default().fg(Color::White))
        };

        frame.render_widget(paragraph.block(block), area);

        if self.field.is_multiline() {
            self.render_scrollbar(frame, area);
        }

        if self.focused {
            frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
        }
    }
}

impl EventHandler for TextField {
    type Event = TextFieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar('\n') if !self.field.is_multiline() => None,
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => self.insert_str(text),
            TuiEvent::Enter => {
                if self.field.is_multiline() {
                    self.insert_str("\n")
                } else {
                    Some(TextFieldEvent::Submit)
                }
            }
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                self.changed()
            }
            TuiEvent::CursorLeft if self.cursor.pos > 0 => {
                self.move_to(prev_char_boundary(&self.buffer, self.cursor.pos))
            }
            TuiEvent::CursorRight if self.cursor.pos < self.buffer.len() => {
                self.move_to(next_char_boundary(&self.buffer, self.cursor.pos))
            }
            TuiEvent::WordLeft => self.move_to(prev_word_boundary(&self.buffer, self.cursor.pos)),
            TuiEvent::WordRight => self.move_to(next_word_boundary(&self.buffer, self.cursor.pos)),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                self.move_to(line_start)
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                self.move_to(line_end)
            }
            TuiEvent::CursorUp if self.field.is_multiline() => self
                .cursor
                .move_vertically(&self.buffer, -1, self.cursor.last_content_width)
                .then_some(TextFieldEvent::CursorMoved),
            TuiEvent::CursorDown if self.field.is_multiline() => self
                .cursor
                .move_vertically(&self.buffer, 1, self.cursor.last_content_width)
                .then_some(TextFieldEvent::CursorMoved),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_emits_full_value() {
        let mut field = TextField::new(Field::Name);
        assert_eq!(
            field.handle_event(&TuiEvent::InputChar('A')),
            Some(TextFieldEvent::Changed("A".into()))
        );
        type_str(&mut field, "na");
        assert_eq!(field.buffer, "Ana");

        assert_eq!(
            field.handle_event(&TuiEvent::Backspace),
            Some(TextFieldEvent::Changed("An".into()))
        );
    }

    #[test]
    fn test_enter_submits_single_line() {
        let mut field = TextField::new(Field::Email);
        type_str(&mut field, "a@b.com");
        assert_eq!(field.handle_event(&TuiEvent::Enter), Some(TextFieldEvent::Submit));
        assert_eq!(field.buffer, "a@b.com");
    }

    #[test]
    fn test_enter_inserts_newline_in_message() {
        let mut field = TextField::new(Field::Message);
        type_str(&mut field, "hi");
        assert_eq!(
            field.handle_event(&TuiEvent::Enter),
            Some(TextFieldEvent::Changed("hi\n".into()))
        );
    }

    #[test]
    fn test_single_line_rejects_newlines() {
        let mut field = TextField::new(Field::Name);
        assert_eq!(field.handle_event(&TuiEvent::InputChar('\n')), None);
        assert_eq!(
            field.handle_event(&TuiEvent::Paste("Ana\r\nMaria".into())),
            Some(TextFieldEvent::Changed("AnaMaria".into()))
        );
    }

    #[test]
    fn test_paste_keeps_newlines_in_message() {
        let mut field = TextField::new(Field::Message);
        assert_eq!(
            field.handle_event(&TuiEvent::Paste("a\r\nb".into())),
            Some(TextFieldEvent::Changed("a\nb".into()))
        );
    }

    #[test]
    fn test_cursor_editing_in_middle() {
        let mut field = TextField::new(Field::Name);
        type_str(&mut field, "Aa");
        field.handle_event(&TuiEvent::CursorLeft);
        field.handle_event(&TuiEvent::InputChar('n'));
        assert_eq!(field.buffer, "Ana");

        field.handle_event(&TuiEvent::CursorHome);
        assert_eq!(
            field.handle_event(&TuiEvent::Delete),
            Some(TextFieldEvent::Changed("na".into()))
        );
        assert_eq!(field.handle_event(&TuiEvent::CursorHome), None);
        assert_eq!(field.handle_event(&TuiEvent::CursorEnd), Some(TextFieldEvent::CursorMoved));
        assert_eq!(field.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_word_movement() {
        let mut field = TextField::new(Field::Email);
        type_str(&mut field, "ana@x.com");
        field.handle_event(&TuiEvent::WordLeft);
        field.handle_event(&TuiEvent::InputChar('y'));
        assert_eq!(field.buffer, "ana@x.ycom");
    }

    #[test]
    fn test_sync_value_replaces_and_moves_cursor() {
        let mut field = TextField::new(Field::Message);
        type_str(&mut field, "Hello");
        field.sync_value("");
        assert_eq!(field.buffer, "");
        // Typing after a reset starts from an empty buffer
        assert_eq!(
            field.handle_event(&TuiEvent::InputChar('x')),
            Some(TextFieldEvent::Changed("x".into()))
        );
    }

    #[test]
    fn test_sync_value_same_value_keeps_cursor() {
        let mut field = TextField::new(Field::Name);
        type_str(&mut field, "Ana");
        field.handle_event(&TuiEvent::CursorHome);
        field.sync_value("Ana");
        field.handle_event(&TuiEvent::InputChar('>'));
        assert_eq!(field.buffer, ">Ana");
    }

    #[test]
    fn test_heights() {
        assert_eq!(TextField::new(Field::Name).height(), 3);
        assert_eq!(TextField::new(Field::Message).height(), 7);
    }

    #[test]
    fn test_render_shows_label_and_placeholder() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = TextField::new(Field::Email);

        terminal.draw(|f| field.render(f, f.area())).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Email"));
        assert!(text.contains("you@company.com"));
    }

    #[test]
    fn test_render_shows_value_instead_of_placeholder() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = TextField::new(Field::Name);
        field.focused = true;
        field.sync_value("Ana");

        terminal.draw(|f| field.render(f, f.area())).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Ana"));
        assert!(!text.contains("Your name"));
    }
}
