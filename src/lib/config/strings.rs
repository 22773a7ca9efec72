//! # Localized UI strings
//!
//! Every user-visible sentence produced by the chat client. Defaults are
//! Indonesian; any subset can be overridden in a `[strings]` table:
//!
//! ```toml
//! [strings]
//! error_prefix = "Sorry, something went wrong: "
//! connection_fallback = "Sorry, cannot reach the server."
//! ```

use super::defaults::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiStrings {
    /// Heading of the welcome placeholder
    pub welcome_title: String,
    /// Body text of the welcome placeholder
    pub welcome_body: String,
    /// Prepended to the backend's error detail on application failures
    pub error_prefix: String,
    /// Shown when the backend cannot be reached or answers garbage
    pub connection_fallback: String,
    /// Question asked before resetting the conversation
    pub reset_confirm: String,
    /// Notification shown when a reset fails
    pub reset_failed: String,
}

impl Default for UiStrings {
    fn default() -> Self {
        Self {
            welcome_title: DEFAULT_WELCOME_TITLE.to_string(),
            welcome_body: DEFAULT_WELCOME_BODY.to_string(),
            error_prefix: DEFAULT_ERROR_PREFIX.to_string(),
            connection_fallback: DEFAULT_CONNECTION_FALLBACK.to_string(),
            reset_confirm: DEFAULT_RESET_CONFIRM.to_string(),
            reset_failed: DEFAULT_RESET_FAILED.to_string(),
        }
    }
}

impl UiStrings {
    /// Text of the bot message for an application-level chat failure.
    pub fn failure_text(&self, detail: &str) -> String {
        format!("{}{}", self.error_prefix, detail)
    }
}

/// Partial `[strings]` table as written in the config file
#[derive(Debug, Default, Deserialize)]
pub(super) struct RawStrings {
    pub welcome_title: Option<String>,
    pub welcome_body: Option<String>,
    pub error_prefix: Option<String>,
    pub connection_fallback: Option<String>,
    pub reset_confirm: Option<String>,
    pub reset_failed: Option<String>,
}

impl From<RawStrings> for UiStrings {
    fn from(raw: RawStrings) -> Self {
        let defaults = UiStrings::default();
        Self {
            welcome_title: raw.welcome_title.unwrap_or(defaults.welcome_title),
            welcome_body: raw.welcome_body.unwrap_or(defaults.welcome_body),
            error_prefix: raw.error_prefix.unwrap_or(defaults.error_prefix),
            connection_fallback: raw
                .connection_fallback
                .unwrap_or(defaults.connection_fallback),
            reset_confirm: raw.reset_confirm.unwrap_or(defaults.reset_confirm),
            reset_failed: raw.reset_failed.unwrap_or(defaults.reset_failed),
        }
    }
}
