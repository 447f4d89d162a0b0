//! Single-line query editor
//!
//! The caret is a byte offset that always sits on a char boundary.

/// A single edit applied to the query line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    /// Insert a character at the caret
    Insert(char),
    /// Remove the character before the caret
    Backspace,
    /// Remove the character under the caret
    Delete,
    /// Move the caret one character left
    Left,
    /// Move the caret one character right
    Right,
    /// Move the caret to the start of the line
    Home,
    /// Move the caret to the end of the line
    End,
    /// Clear the whole line
    Clear,
    /// Remove the word before the caret
    DeleteWord,
}

/// Editable query text with a caret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
    caret: usize,
}

impl QueryInput {
    /// Create an empty query
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            caret: 0,
        }
    }

    /// Current query text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position as a byte offset into [`QueryInput::text`]
    #[must_use]
    pub const fn caret(&self) -> usize {
        self.caret
    }

    /// Apply one edit; returns whether the text changed
    pub fn apply(&mut self, edit: TextEdit) -> bool {
        match edit {
            TextEdit::Insert(c) => {
                self.text.insert(self.caret, c);
                self.caret += c.len_utf8();
                true
            }
            TextEdit::Backspace => {
                if self.caret == 0 {
                    return false;
                }
                let prev = self.prev_boundary();
                self.text.remove(prev);
                self.caret = prev;
                true
            }
            TextEdit::Delete => {
                if self.caret >= self.text.len() {
                    return false;
                }
                self.text.remove(self.caret);
                true
            }
            TextEdit::Left => {
                self.caret = self.prev_boundary();
                false
            }
            TextEdit::Right => {
                self.caret = self.next_boundary();
                false
            }
            TextEdit::Home => {
                self.caret = 0;
                false
            }
            TextEdit::End => {
                self.caret = self.text.len();
                false
            }
            TextEdit::Clear => {
                let changed = !self.text.is_empty();
                self.text.clear();
                self.caret = 0;
                changed
            }
            TextEdit::DeleteWord => {
                if self.caret == 0 {
                    return false;
                }
                let trimmed = self.text[..self.caret].trim_end();
                let start = trimmed.rfind(' ').map_or(0, |space| space + 1);
                self.text.drain(start..self.caret);
                self.caret = start;
                true
            }
        }
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.caret]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.caret..]
            .char_indices()
            .nth(1)
            .map_or(self.text.len(), |(i, _)| self.caret + i)
    }
}
