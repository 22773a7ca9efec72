pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod tui;

pub use application::{client, stdio};
pub use cli::{Cli, RunMode};
pub use config::{AppConfig, ConfigError, UiStrings};
pub use domain::types;
pub use infrastructure::backend;

use application::client::{ChatClient, ClientConfig};
use application::stdio::StdioConsole;
use config::loader::resolve_path;
use infrastructure::backend::HttpBackend;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    // The TUI owns the terminal, so log output would corrupt the screen.
    init_tracing(cli.mode == RunMode::Tui);
    info!("Starting webchat");
    debug!(
        mode = ?cli.mode,
        config = ?cli.config,
        base_url = ?cli.base_url,
        "CLI arguments parsed"
    );

    let config_path = cli.config.as_deref().map(resolve_path).transpose()?;
    let mut file_config = AppConfig::load(config_path.as_deref())?;
    if let Some(path) = &config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path");
    }
    if let Some(base_url) = cli.base_url.clone() {
        info!(url = base_url.as_str(), "Overriding base_url from CLI flag");
        file_config = file_config.with_base_url(base_url)?;
    }

    let backend = HttpBackend::new(file_config.base_url.clone());
    let endpoint = backend.base_url().to_string();
    let client_config = ClientConfig::from_app_config(&file_config);

    info!(mode = ?cli.mode, url = endpoint.as_str(), "Running client in selected mode");
    match cli.mode {
        RunMode::Stdio => {
            let console = Arc::new(StdioConsole::new());
            let client = Arc::new(ChatClient::new(backend, console.clone(), client_config));
            stdio::run(client, console).await?;
        }
        RunMode::Tui => {
            let (interaction, dialogs) = tui::TuiInteraction::channel();
            let client = Arc::new(ChatClient::new(backend, interaction, client_config));
            tui::run_chat(client, dialogs, &endpoint).await?;
        }
    }
    info!("Client execution finished");
    Ok(())
}

fn init_tracing(quiet: bool) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        };
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
