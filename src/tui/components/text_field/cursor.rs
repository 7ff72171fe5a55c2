//! Cursor position tracking and navigation for a TextField.
//!
//! `CursorState` owns the cursor byte offset, scroll offset, and cached width.
//! All navigation methods accept `buffer: &str` explicitly; the text itself is
//! owned by `TextField`.

use super::text_wrap::{BORDER_OFFSET, inner_width, wrap_line_count, wrap_options, wrapped_lines};
use ratatui::layout::Rect;
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

/// Cursor and scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Line offset for internal scrolling (0 when content fits in viewport)
    pub scroll_offset: u16,
    /// Cached content width from last render (used for cursor movement)
    pub last_content_width: u16,
    /// Number of content rows the field shows
    pub visible_lines: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 40;

    pub fn new(visible_lines: u16) -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
            visible_lines: visible_lines.max(1),
        }
    }

    /// Place the cursor at the end of `buffer` (used when the value is replaced).
    pub fn move_to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
        self.scroll_offset = 0;
    }

    /// Move cursor vertically (up or down) while trying to maintain column position.
    ///
    /// Returns `true` if cursor moved, `false` if already at boundary.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, content_width: u16) -> bool {
        let width = inner_width(content_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let lines = textwrap::wrap(buffer, wrap_options(width));
        if lines.is_empty() {
            return false;
        }

        let starts = line_starts(buffer, &lines);

        // Last wrapped line starting at or before the cursor. A cursor sitting in
        // whitespace dropped at a soft break stays on the line before it.
        let current_line_idx = starts
            .iter()
            .rposition(|&start| start <= self.pos)
            .unwrap_or(0);
        let column_in_line = self.pos - starts[current_line_idx].min(self.pos);

        let target_line_idx = if direction < 0 {
            if current_line_idx == 0 {
                return false;
            }
            current_line_idx - 1
        } else {
            if current_line_idx >= lines.len() - 1 {
                return false;
            }
            current_line_idx + 1
        };

        let target_line_start = starts[target_line_idx];
        // Same column, clamped to the target line and snapped to a char boundary
        let mut target = target_line_start + column_in_line.min(lines[target_line_idx].len());
        while !buffer.is_char_boundary(target) {
            target -= 1;
        }
        self.pos = target;

        true
    }

    /// Calculate which wrapped line (0-based) the cursor is on.
    pub fn calculate_line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }
        wrap_line_count(&buffer[..self.pos], width).saturating_sub(1)
    }

    /// Update scroll offset to keep cursor visible within the viewport.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let width = inner_width(content_width);
        let total_lines = wrap_line_count(buffer, width);

        if total_lines <= self.visible_lines {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(buffer, content_width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + self.visible_lines {
            self.scroll_offset = cursor_line.saturating_sub(self.visible_lines - 1);
        }
    }

    /// Calculate screen position for cursor based on wrapped text layout.
    /// Returns (column, row) in screen coordinates.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + BORDER_OFFSET, area.y + BORDER_OFFSET);
        }

        let text_before_cursor = &buffer[..self.pos];
        let cursor_line = self.calculate_line(buffer, area.width);

        // Column from the last newline, measured in display cells. textwrap trims
        // trailing whitespace, so the wrapped segment alone would drop spaces.
        let last_newline = text_before_cursor
            .rfind('\n')
            .map(|pos| pos + 1)
            .unwrap_or(0);
        let logical_line_to_cursor = &text_before_cursor[last_newline..];
        let segments = wrapped_lines(logical_line_to_cursor, width);

        let width_in_prev_segments: usize = segments
            .iter()
            .take(segments.len().saturating_sub(1))
            .map(|seg| seg.width())
            .sum();
        let cursor_col = logical_line_to_cursor
            .width()
            .saturating_sub(width_in_prev_segments)
            .min(width as usize) as u16;

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);

        let screen_col = area.x + BORDER_OFFSET + cursor_col;
        let screen_row = area.y + BORDER_OFFSET + visible_line;

        (screen_col, screen_row)
    }
}

/// Byte offset in `buffer` where each wrapped line begins.
///
/// textwrap hands back slices of the input, so the offset comes from the slice
/// itself. Soft breaks drop whitespace between lines, which rules out summing
/// line lengths.
fn line_starts(buffer: &str, lines: &[Cow<'_, str>]) -> Vec<usize> {
    let base = buffer.as_ptr() as usize;
    let mut starts = Vec::with_capacity(lines.len());
    let mut search_from = 0;

    for line in lines {
        let addr = line.as_ptr() as usize;
        let start = match line {
            Cow::Borrowed(_) if addr >= base && addr - base <= buffer.len() => {
                addr - base
            }
            _ => buffer[search_from..]
                .find(line.as_ref())
                .map_or(search_from, |i| search_from + i),
        };
        starts.push(start);
        search_from = (start + line.len()).min(buffer.len());
    }

    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_to_end() {
        let mut cursor = CursorState::new(1);
        cursor.scroll_offset = 3;
        cursor.move_to_end("héllo");
        assert_eq!(cursor.pos, 6);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn test_move_vertically_between_lines() {
        let buffer = "abc\ndef";
        let mut cursor = CursorState::new(5);
        cursor.pos = 5; // after 'd'

        assert!(cursor.move_vertically(buffer, -1, 40));
        assert_eq!(cursor.pos, 1);
        assert!(!cursor.move_vertically(buffer, -1, 40));

        assert!(cursor.move_vertically(buffer, 1, 40));
        assert_eq!(cursor.pos, 5);
        assert!(!cursor.move_vertically(buffer, 1, 40));
    }

    #[test]
    fn test_move_vertically_across_soft_wrap() {
        // Inner width 4: "aaaa" / "bbbb", the space is dropped at the break
        let buffer = "aaaa bbbb";
        let mut cursor = CursorState::new(5);

        assert!(cursor.move_vertically(buffer, 1, 6));
        assert_eq!(cursor.pos, 5);
        assert!(cursor.move_vertically(buffer, -1, 6));
        assert_eq!(cursor.pos, 0);
    }

    #[test]
    fn test_move_vertically_up_from_end_of_wrapped_text() {
        let buffer = "aaaa bbbb cccc";
        let mut cursor = CursorState::new(5);
        cursor.pos = buffer.len();

        assert!(cursor.move_vertically(buffer, -1, 6));
        assert_eq!(cursor.pos, 9);
        assert_eq!(&buffer[..cursor.pos], "aaaa bbbb");
        assert!(cursor.move_vertically(buffer, -1, 6));
        assert_eq!(cursor.pos, 4);
        assert!(!cursor.move_vertically(buffer, -1, 6));
    }

    #[test]
    fn test_move_vertically_mixed_breaks() {
        // "ab" / "cd efgh" wraps to "ab" / "cd" / "efgh" at inner width 4
        let buffer = "ab\ncd efgh";
        let mut cursor = CursorState::new(5);
        cursor.pos = 1;

        assert!(cursor.move_vertically(buffer, 1, 6));
        assert_eq!(cursor.pos, 4);
        assert!(cursor.move_vertically(buffer, 1, 6));
        assert_eq!(cursor.pos, 7);
        assert!(!cursor.move_vertically(buffer, 1, 6));
    }

    #[test]
    fn test_screen_pos_single_line() {
        let mut cursor = CursorState::new(1);
        cursor.pos = 3;
        let area = Rect::new(10, 5, 20, 3);
        assert_eq!(cursor.screen_pos("Ana", area), (14, 6));
    }

    #[test]
    fn test_screen_pos_after_newline() {
        let mut cursor = CursorState::new(5);
        cursor.pos = 4;
        let area = Rect::new(0, 0, 20, 7);
        assert_eq!(cursor.screen_pos("abc\n", area), (1, 2));
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let buffer = "1\n2\n3\n4";
        let mut cursor = CursorState::new(2);
        cursor.pos = buffer.len();
        cursor.update_scroll_offset(buffer, 20);
        assert_eq!(cursor.scroll_offset, 2);

        cursor.pos = 0;
        cursor.update_scroll_offset(buffer, 20);
        assert_eq!(cursor.scroll_offset, 0);
    }
}
