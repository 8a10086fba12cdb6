//! Body editor module
//!
//! A small multi-line text area for the JSON request body. The editor only
//! knows about text and a cursor; parsing the content happens at submit time
//! in the composer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Skeleton shown in a fresh JSON editor: an empty object spread over two lines
pub const EMPTY_OBJECT_SKELETON: &str = "{\n  \n}";

/// A multi-line text editor for the JSON request body
#[derive(Debug, Clone)]
pub struct BodyEditor {
    /// The content being edited
    content: String,

    /// Cursor position (byte offset in content)
    cursor: usize,
}

impl Default for BodyEditor {
    /// Starts with the empty-object skeleton, cursor on the blank middle line
    fn default() -> Self {
        Self {
            content: EMPTY_OBJECT_SKELETON.to_string(),
            cursor: 4,
        }
    }
}

impl BodyEditor {
    /// Create an editor with initial content, cursor at the end
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.len();
        Self { content, cursor }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace all content, cursor at the end
    pub fn set_content(&mut self, content: String) {
        self.cursor = content.len();
        self.content = content;
    }

    pub fn clear(&mut self) {
        self.set_content(String::new());
    }

    /// Lines of the content; a trailing newline yields a final empty line
    pub fn lines(&self) -> Vec<&str> {
        self.content.split('\n').collect()
    }

    /// Cursor position as (line, column), both zero-based, column in chars
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.content[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let col = before[line_start..].chars().count();
        (line, col)
    }

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.insert(cursor, c);
        self.cursor = cursor + c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn insert_str(&mut self, s: &str) {
        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.insert_str(cursor, s);
        self.cursor = cursor + s.len();
    }

    /// Insert pasted text, converting curly quotes to straight ones and
    /// CRLF line endings to LF
    pub fn insert_str_normalized(&mut self, s: &str) {
        let normalized = s
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .replace(['\u{201C}', '\u{201D}'], "\"")
            .replace(['\u{2018}', '\u{2019}'], "'");
        self.insert_str(&normalized);
    }

    /// Backspace
    pub fn delete_char_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary(self.cursor);
        self.content.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }

    /// Delete key
    pub fn delete_char_after_cursor(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        let next = self.next_boundary(self.cursor);
        self.content.replace_range(self.cursor..next, "");
        true
    }

    pub fn move_cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = self.prev_boundary(self.cursor);
        true
    }

    pub fn move_cursor_right(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.cursor = self.next_boundary(self.cursor);
        true
    }

    pub fn move_cursor_up(&mut self) -> bool {
        let (line, col) = self.cursor_line_col();
        if line == 0 {
            return false;
        }
        self.cursor = self.offset_for(line - 1, col);
        true
    }

    pub fn move_cursor_down(&mut self) -> bool {
        let (line, col) = self.cursor_line_col();
        if line + 1 >= self.lines().len() {
            return false;
        }
        self.cursor = self.offset_for(line + 1, col);
        true
    }

    /// Move to the start of the current line
    pub fn move_cursor_to_line_start(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.cursor = self.offset_for(line, 0);
    }

    /// Move to the end of the current line
    pub fn move_cursor_to_line_end(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.cursor = self.offset_for(line, usize::MAX);
    }

    /// Handle a key event - returns true if the event was handled
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Backspace => self.delete_char_before_cursor(),
            KeyCode::Delete => self.delete_char_after_cursor(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Up => self.move_cursor_up(),
            KeyCode::Down => self.move_cursor_down(),
            KeyCode::Home => {
                self.move_cursor_to_line_start();
                true
            }
            KeyCode::End => {
                self.move_cursor_to_line_end();
                true
            }
            KeyCode::Enter => {
                self.insert_newline();
                true
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_cursor_to_line_start();
                true
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_cursor_to_line_end();
                true
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
                true
            }
            _ => false,
        }
    }

    /// Byte offset of (line, col), clamping col to the line length
    fn offset_for(&self, line: usize, col: usize) -> usize {
        let mut offset = 0;
        for (idx, text) in self.content.split('\n').enumerate() {
            if idx == line {
                let within = text
                    .char_indices()
                    .nth(col)
                    .map(|(i, _)| i)
                    .unwrap_or(text.len());
                return offset + within;
            }
            offset += text.len() + 1;
        }
        self.content.len()
    }

    fn prev_boundary(&self, from: usize) -> usize {
        let mut pos = from.saturating_sub(1);
        while pos > 0 && !self.content.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn next_boundary(&self, from: usize) -> usize {
        let mut pos = from + 1;
        while pos < self.content.len() && !self.content.is_char_boundary(pos) {
            pos += 1;
        }
        pos.min(self.content.len())
    }

    fn clamp_cursor_to_boundary(&self, cursor: usize) -> usize {
        let mut pos = cursor.min(self.content.len());
        while pos > 0 && !self.content.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}
