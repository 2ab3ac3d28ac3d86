//! Single-line text editing (pure state transitions).
//!
//! Backs the filter bar and the page-number entry. The cursor counts
//! characters, not bytes, so multi-byte input edits correctly.

/// Editable text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Input pre-filled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert `ch` at the cursor and advance.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns whether text changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor. Returns whether text changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Text before and after the cursor, for rendering.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.byte_offset(self.cursor))
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_appends_at_cursor() {
        let mut input = TextInput::default();
        input.insert('a');
        input.insert('c');
        input.move_left();
        input.insert('b');
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInput::with_text("ab");
        input.move_home();
        assert!(!input.backspace());
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn backspace_removes_previous_char() {
        let mut input = TextInput::with_text("abc");
        assert!(input.backspace());
        assert_eq!(input.text(), "ab");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut input = TextInput::with_text("abc");
        input.move_home();
        assert!(input.delete());
        assert_eq!(input.text(), "bc");
        input.move_end();
        assert!(!input.delete());
    }

    #[test]
    fn cursor_movement_saturates() {
        let mut input = TextInput::with_text("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_left();
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn multibyte_characters_edit_by_char() {
        let mut input = TextInput::with_text("héllo");
        input.move_home();
        input.move_right();
        input.move_right();
        assert!(input.backspace());
        assert_eq!(input.text(), "hllo");
        input.insert('é');
        assert_eq!(input.text(), "héllo");
    }

    #[test]
    fn split_at_cursor_divides_text() {
        let mut input = TextInput::with_text("lorem");
        input.move_left();
        input.move_left();
        assert_eq!(input.split_at_cursor(), ("lor", "em"));
    }

    #[test]
    fn clear_resets_cursor() {
        let mut input = TextInput::with_text("abc");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
