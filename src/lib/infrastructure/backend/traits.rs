//! Backend traits

use super::types::{BackendError, ChatReply, ResetReply};
use async_trait::async_trait;

/// Remote chat service consumed by the chat client.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send a user message and wait for the reply
    async fn send_message(&self, message: &str) -> Result<ChatReply, BackendError>;

    /// Ask the backend to forget the conversation history
    async fn reset(&self) -> Result<ResetReply, BackendError>;
}
