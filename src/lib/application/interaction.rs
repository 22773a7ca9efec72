//! User interaction capability
//!
//! Blocking confirmation and notification, injected into the chat client so
//! each surface (and each test) decides how they are presented.

use async_trait::async_trait;

#[async_trait]
pub trait Interaction: Send + Sync {
    /// Ask a yes/no question. Resolves to `true` only on explicit consent.
    async fn confirm(&self, prompt: &str) -> bool;

    /// Show a message and resolve once the user has acknowledged it.
    async fn notify(&self, message: &str);
}

#[async_trait]
impl<T> Interaction for std::sync::Arc<T>
where
    T: Interaction + ?Sized,
{
    async fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt).await
    }

    async fn notify(&self, message: &str) {
        (**self).notify(message).await
    }
}
