//! Application constants
//!
//! Single source of truth for paths and other constants.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/client.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable overriding the backend base URL
pub const BASE_URL_ENV: &str = "WEBCHAT_BASE_URL";

/// Backend base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Chat endpoint path, relative to the base URL
pub const CHAT_PATH: &str = "/api/chat";

/// Reset endpoint path, relative to the base URL
pub const RESET_PATH: &str = "/api/reset";

/// Value of `status` that marks a successful backend reply
pub const SUCCESS_STATUS: &str = "success";

/// Maximum height of the input box, in rows
pub const DEFAULT_MAX_INPUT_HEIGHT: u16 = 6;
