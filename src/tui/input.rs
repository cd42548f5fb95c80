//! Search box editing.
//!
//! Single-line text buffer behind the search input. Cursor movement and
//! deletion respect UTF-8 character boundaries.

use crossterm::event::{KeyCode, KeyEvent};

/// The search query buffer.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    /// The query text
    content: String,
    /// Cursor position (byte index, always on a char boundary)
    cursor: usize,
}

impl SearchInput {
    /// Create an empty search input.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw query text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor byte position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let boundary = self.prev_char_boundary(self.cursor);
            self.content.remove(boundary);
            self.cursor = boundary;
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Clear the query.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Handle a key event while the search box has focus.
    ///
    /// Returns true when the query text changed, so the caller knows the
    /// filtered view moved under the list cursor.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                let had_content = self.cursor > 0;
                self.backspace();
                had_content
            }
            KeyCode::Delete => {
                let had_content = self.cursor < self.content.len();
                self.delete();
                had_content
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor = self.prev_char_boundary(self.cursor);
                }
                false
            }
            KeyCode::Right => {
                if self.cursor < self.content.len() {
                    self.cursor = self.next_char_boundary(self.cursor);
                }
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.content.len();
                false
            }
            _ => false,
        }
    }

    /// Find the previous character boundary
    fn prev_char_boundary(&self, pos: usize) -> usize {
        let mut idx = pos.saturating_sub(1);
        while idx > 0 && !self.content.is_char_boundary(idx) {
            idx -= 1;
        }
        idx
    }

    /// Find the next character boundary
    fn next_char_boundary(&self, pos: usize) -> usize {
        let mut idx = pos + 1;
        while idx < self.content.len() && !self.content.is_char_boundary(idx) {
            idx += 1;
        }
        idx.min(self.content.len())
    }
}
