//! Conversation view
//!
//! Ordered list of rendered chat entries. Entries are appended in
//! chronological order; the only removals are the welcome placeholder,
//! a typing placeholder by id, and the full replacement on reset.

use crate::types::{EntryId, EntryKind, Message, ViewEntry};

#[derive(Debug, Clone)]
pub struct ConversationView {
    entries: Vec<ViewEntry>,
    next_id: u64,
}

impl Default for ConversationView {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationView {
    /// Creates a view holding only the welcome placeholder.
    pub fn new() -> Self {
        let mut view = Self {
            entries: Vec::new(),
            next_id: 0,
        };
        view.push(EntryKind::Welcome);
        view
    }

    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    pub fn append_message(&mut self, message: Message) -> ViewEntry {
        self.push(EntryKind::Message(message))
    }

    pub fn append_typing(&mut self) -> ViewEntry {
        self.push(EntryKind::Typing)
    }

    /// Removes the welcome placeholder, returning its id if one was present.
    pub fn remove_welcome(&mut self) -> Option<EntryId> {
        let index = self.entries.iter().position(ViewEntry::is_welcome)?;
        Some(self.entries.remove(index).id)
    }

    /// Removes a typing placeholder. Returns false when it is already gone,
    /// which happens after a reset replaced the whole view.
    pub fn remove_typing(&mut self, id: EntryId) -> bool {
        match self
            .entries
            .iter()
            .position(|entry| entry.id == id && entry.is_typing())
        {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces every entry with a fresh welcome placeholder.
    pub fn restore_welcome(&mut self) -> ViewEntry {
        self.entries.clear();
        self.push(EntryKind::Welcome)
    }

    fn push(&mut self, kind: EntryKind) -> ViewEntry {
        let entry = ViewEntry {
            id: EntryId(self.next_id),
            kind,
        };
        self.next_id += 1;
        self.entries.push(entry.clone());
        entry
    }
}
