use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "webchat",
    version,
    about = "Klien chat untuk backend /api/chat"
)]
pub struct Cli {
    /// Configuration file path (defaults to config/client.toml)
    #[arg(long)]
    pub config: Option<String>,
    /// Backend base URL, overrides the config file and WEBCHAT_BASE_URL
    #[arg(long)]
    pub base_url: Option<String>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Tui)]
    pub mode: RunMode,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Line-oriented chat on stdin/stdout
    Stdio,
    /// Full-screen terminal chat
    Tui,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_terminal_ui() {
        let cli = Cli::parse_from(["webchat"]);
        assert_eq!(cli.mode, RunMode::Tui);
        assert!(cli.config.is_none());
        assert!(cli.base_url.is_none());
    }

    #[test]
    fn parses_stdio_mode_and_overrides() {
        let cli = Cli::parse_from([
            "webchat",
            "-m",
            "stdio",
            "--base-url",
            "http://localhost:8000",
            "--config",
            "~/chat.toml",
        ]);
        assert_eq!(cli.mode, RunMode::Stdio);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(cli.config.as_deref(), Some("~/chat.toml"));
    }
}
