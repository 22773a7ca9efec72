use super::error::ConfigError;
use super::strings::UiStrings;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_INPUT_HEIGHT};
use std::path::Path;

/// Application configuration loaded from client.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the chat backend, without the `/api/...` path
    pub base_url: String,
    /// Maximum height of the input box, in rows
    pub max_input_height: u16,
    pub strings: UiStrings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_input_height: DEFAULT_MAX_INPUT_HEIGHT,
            strings: UiStrings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Replace the backend base URL, validating it first.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        self.base_url = super::loader::validate_base_url(base_url.into())?;
        Ok(self)
    }
}
