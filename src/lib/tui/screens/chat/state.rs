//! Chat screen state
//!
//! Conversation and input live in the chat client; this is what only the
//! screen cares about: scrolling, animation and open dialogs.

use super::dialog::DialogRequest;
use std::collections::VecDeque;

/// Chat screen state
pub struct ChatState {
    /// Scroll offset for messages, `u16::MAX` sticks to the bottom
    pub scroll_offset: u16,
    /// Largest useful scroll offset, known after the last render
    pub max_scroll: u16,
    /// Typing indicator animation frame
    pub loading_frame: usize,
    /// Status message
    pub status_message: Option<String>,
    /// Dialog currently shown
    pub dialog: Option<DialogRequest>,
    queued_dialogs: VecDeque<DialogRequest>,
    last_revision: Option<u64>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            scroll_offset: u16::MAX,
            max_scroll: 0,
            loading_frame: 0,
            status_message: None,
            dialog: None,
            queued_dialogs: VecDeque::new(),
            last_revision: None,
        }
    }

    /// Scroll messages up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll messages down
    pub fn scroll_down(&mut self, max_scroll: u16) {
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to bottom of messages
    pub fn scroll_to_bottom(&mut self) {
        // Resolved against the content height during render
        self.scroll_offset = u16::MAX;
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        self.loading_frame = (self.loading_frame + 1) % 4;
    }

    /// Jump to the newest entry whenever the conversation changed.
    /// Returns whether it did.
    pub fn observe_revision(&mut self, revision: u64) -> bool {
        if self.last_revision == Some(revision) {
            return false;
        }
        self.last_revision = Some(revision);
        self.scroll_to_bottom();
        true
    }

    /// Queue a dialog; it is shown once the current one is answered.
    pub fn push_dialog(&mut self, request: DialogRequest) {
        if self.dialog.is_none() {
            self.dialog = Some(request);
        } else {
            self.queued_dialogs.push_back(request);
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    /// Answer the visible dialog and bring up the next queued one.
    pub fn answer_dialog(&mut self, accepted: bool) {
        if let Some(dialog) = self.dialog.take() {
            dialog.answer(accepted);
        }
        self.dialog = self.queued_dialogs.pop_front();
    }
}
