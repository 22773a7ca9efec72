use super::AppConfig;
use super::error::ConfigError;
use super::strings::{RawStrings, UiStrings};
use crate::constants::{BASE_URL_ENV, CONFIG_PATH, DEFAULT_BASE_URL, DEFAULT_MAX_INPUT_HEIGHT, ENV_PATH};
use dotenvy::from_filename;
use reqwest::Url;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{debug, info};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub base_url: Option<String>,
    pub max_input_height: Option<u16>,
    #[serde(default)]
    pub strings: RawStrings,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Expands `~` and `$VARS` in a config path given on the command line.
pub fn resolve_path(raw: &str) -> Result<PathBuf, ConfigError> {
    shellexpand::full(raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| ConfigError::Expand {
            path: raw.to_string(),
            reason: e.to_string(),
        })
}

/// Load and validate configuration.
///
/// An explicit `path` must exist. Without one, `config/client.toml` is used
/// when present and built-in defaults otherwise. `WEBCHAT_BASE_URL` wins
/// over the file's `base_url`.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    let parsed = match path {
        Some(path) => read_config(path)?,
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { path }) => {
                info!(path = %path.display(), "No configuration file, using defaults");
                RawConfig::default()
            }
            other => other?,
        },
    };

    validate_and_build(parsed, env_base_url())
}

fn env_base_url() -> Option<String> {
    env::var(BASE_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading client configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_and_build(
    parsed: RawConfig,
    base_url_override: Option<String>,
) -> Result<AppConfig, ConfigError> {
    if let Some(url) = &base_url_override {
        debug!(url = url.as_str(), "Overriding base_url from environment");
    }
    let base_url = base_url_override
        .or(parsed.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let base_url = validate_base_url(base_url)?;

    let max_input_height = parsed.max_input_height.unwrap_or(DEFAULT_MAX_INPUT_HEIGHT);
    if max_input_height == 0 {
        return Err(ConfigError::InvalidInputHeight);
    }

    Ok(AppConfig {
        base_url,
        max_input_height,
        strings: UiStrings::from(parsed.strings),
    })
}

pub(super) fn validate_base_url(value: String) -> Result<String, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
        value: value.clone(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            reason: format!("unsupported scheme '{}'", url.scheme()),
            value,
        });
    }
    Ok(value.trim().to_string())
}
