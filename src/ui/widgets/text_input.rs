use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::super::theme;

/// A stateful single-line text input with cursor navigation.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new(initial: &str) -> Self {
        Self {
            value: initial.to_string(),
            cursor: initial.len(),
        }
    }

    pub fn insert(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.value.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor += self.value[self.cursor..]
                .chars()
                .next()
                .map_or(0, char::len_utf8);
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }
}

/// Renders a `TextInput` as a single line with cursor highlighting.
pub struct TextInputWidget<'a> {
    pub input: &'a TextInput,
    pub label: &'a str,
    pub focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput, label: &'a str, focused: bool) -> Self {
        Self {
            input,
            label,
            focused,
        }
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 4 {
            return;
        }

        let label_style = if self.focused {
            theme::selected_style()
        } else {
            theme::dim_style()
        };

        let line = if self.focused {
            let (before, at_cursor, after) = split_at_cursor(&self.input.value, self.input.cursor);
            Line::from(vec![
                Span::styled(format!("  {}: ", self.label), label_style),
                Span::styled(before, theme::input_style()),
                Span::styled(at_cursor, theme::cursor_style()),
                Span::styled(after, theme::input_style()),
            ])
        } else {
            Line::from(vec![
                Span::styled(format!("  {}: ", self.label), label_style),
                Span::styled(self.input.value.clone(), theme::dim_style()),
            ])
        };
        line.render(area, buf);
    }
}

fn split_at_cursor(value: &str, cursor: usize) -> (String, String, String) {
    let cursor = cursor.min(value.len());
    let before = value[..cursor].to_string();
    let mut rest = value[cursor..].chars();
    let at = rest.next().map_or_else(|| " ".to_string(), |c| c.to_string());
    let after: String = rest.collect();
    (before, at, after)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_track_cursor() {
        let mut input = TextInput::new("");
        input.insert('a');
        input.insert('b');
        assert_eq!(input.value, "ab");
        assert_eq!(input.cursor, 2);
        input.backspace();
        assert_eq!(input.value, "a");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn cursor_movement_respects_char_boundaries() {
        let mut input = TextInput::new("héllo");
        input.move_left();
        input.move_left();
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 1); // after 'h', before 'é'
        input.insert('x');
        assert_eq!(input.value, "hxéllo");
        input.move_right();
        assert_eq!(input.cursor, 4); // past the two-byte 'é'
    }

    #[test]
    fn is_empty_ignores_whitespace() {
        assert!(TextInput::new("   ").is_empty());
        assert!(!TextInput::new(" x ").is_empty());
    }

    #[test]
    fn split_at_cursor_pads_end_of_line() {
        let (before, at, after) = split_at_cursor("ab", 2);
        assert_eq!(before, "ab");
        assert_eq!(at, " ");
        assert_eq!(after, "");
    }
}
