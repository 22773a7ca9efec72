//! Input affordance state
//!
//! Holds the message being typed together with the send/focus flags that
//! the chat client toggles around a request.

/// The message input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    /// Current input buffer
    pub text: String,
    /// Cursor position, counted in characters
    pub cursor_pos: usize,
    /// Whether the send affordance accepts a submission
    pub send_enabled: bool,
    /// Whether the input has focus
    pub focused: bool,
    /// Visible height in rows, maintained by `auto_resize`
    pub height: u16,
    max_height: u16,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_MAX_INPUT_HEIGHT)
    }
}

impl Composer {
    pub fn new(max_height: u16) -> Self {
        Self {
            text: String::new(),
            cursor_pos: 0,
            send_enabled: true,
            focused: true,
            height: 1,
            max_height: max_height.max(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Empties the buffer and shrinks the box back to a single row.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_pos = 0;
        self.height = 1;
    }

    /// Replaces the buffer, placing the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor_pos = self.text.chars().count();
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor_pos);
        self.text.insert(offset, c);
        self.cursor_pos += 1;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let offset = self.byte_offset(self.cursor_pos - 1);
        self.text.remove(offset);
        self.cursor_pos -= 1;
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.char_len() {
            let offset = self.byte_offset(self.cursor_pos);
            self.text.remove(offset);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    /// Fits the box height to the content: one row per explicit line plus
    /// soft wraps at `width` columns, capped at the configured maximum.
    /// A `width` of zero disables soft wrapping.
    pub fn auto_resize(&mut self, width: u16) {
        let rows: usize = self
            .text
            .split('\n')
            .map(|line| {
                let chars = line.chars().count();
                if width == 0 || chars == 0 {
                    1
                } else {
                    chars.div_ceil(width as usize)
                }
            })
            .sum();
        self.height = rows.clamp(1, self.max_height as usize) as u16;
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}
