use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A rendered chat message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Local>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender,
            sent_at: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }
}

/// Identifier of an entry in the conversation view, unique per client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Placeholder shown until the first message of a conversation.
    Welcome,
    Message(Message),
    /// Transient indicator while a reply is pending.
    Typing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub id: EntryId,
    pub kind: EntryKind,
}

impl ViewEntry {
    pub fn message(&self) -> Option<&Message> {
        match &self.kind {
            EntryKind::Message(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_welcome(&self) -> bool {
        matches!(self.kind, EntryKind::Welcome)
    }

    pub fn is_typing(&self) -> bool {
        matches!(self.kind, EntryKind::Typing)
    }
}
