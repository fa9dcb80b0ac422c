//! Text input widget
//!
//! A single-line text field with a character-based cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::tui::theme::Palette;

/// Editable text state for one field
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters, not bytes
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content and move the cursor to the end
    pub fn set(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Renders a [`TextInput`] with a label and placeholder
pub struct InputField<'a> {
    input: &'a TextInput,
    label: &'a str,
    placeholder: &'a str,
    focused: bool,
    palette: Palette,
}

impl<'a> InputField<'a> {
    pub fn new(input: &'a TextInput, label: &'a str, palette: Palette) -> Self {
        Self {
            input,
            label,
            placeholder: "",
            focused: false,
            palette,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() as u16 + 2
        };

        if label_width > 0 {
            let label_line = Line::from(vec![
                Span::styled(self.label, Style::default().fg(palette.accent)),
                Span::styled(": ", palette.base()),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let input_start = area.x + label_width;
        let input_width = area.width.saturating_sub(label_width);

        let (text, style) = if self.input.value().is_empty() && !self.focused {
            (self.placeholder, palette.muted_style())
        } else {
            (self.input.value(), palette.base())
        };
        buf.set_stringn(input_start, area.y, text, input_width as usize, style);

        if self.focused {
            let cursor_x = input_start + self.input.cursor() as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.input.value().chars().nth(self.input.cursor()).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(palette.background).bg(palette.accent),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "12.5".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "12.5");

        input.backspace();
        assert_eq!(input.value(), "12.");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        input.set("₹5 café");
        input.move_start();
        input.move_right();
        input.delete();
        assert_eq!(input.value(), "₹ café");

        input.move_end();
        input.backspace();
        input.insert('e');
        assert_eq!(input.value(), "₹ cafe");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new();
        input.move_left();
        assert_eq!(input.cursor(), 0);

        input.set("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);

        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }
}
