use super::client::{ChatClient, ResetOutcome, SubmitOutcome, ViewEvent};
use super::interaction::Interaction;
use crate::config::UiStrings;
use crate::infrastructure::backend::ChatBackend;
use crate::types::{EntryKind, Sender, ViewEntry};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};
use tokio::sync::{Mutex, broadcast};
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum StdioError {
    #[error("stdin/stdout I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared terminal handle: the prompt loop and the confirmation prompt read
/// from the same line stream.
pub struct StdioConsole {
    lines: Mutex<Lines<BufReader<Stdin>>>,
    stdout: Mutex<Stdout>,
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl StdioConsole {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(BufReader::new(io::stdin()).lines()),
            stdout: Mutex::new(io::stdout()),
        }
    }

    async fn next_line(&self) -> io::Result<Option<String>> {
        self.lines.lock().await.next_line().await
    }

    async fn write(&self, text: &str) -> io::Result<()> {
        let mut stdout = self.stdout.lock().await;
        stdout.write_all(text.as_bytes()).await?;
        stdout.flush().await
    }

    async fn write_line(&self, line: &str) -> io::Result<()> {
        let mut stdout = self.stdout.lock().await;
        stdout.write_all(line.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await
    }
}

#[async_trait]
impl Interaction for StdioConsole {
    async fn confirm(&self, prompt: &str) -> bool {
        if let Err(error) = self.write(&format!("{prompt} [y/N] ")).await {
            warn!(%error, "Cannot write confirmation prompt");
            return false;
        }
        match self.next_line().await {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(error) => {
                warn!(%error, "Cannot read confirmation answer");
                false
            }
        }
    }

    async fn notify(&self, message: &str) {
        if let Err(error) = self.write_line(&format!("\n[!] {message}")).await {
            warn!(%error, "Cannot write notification");
        }
    }
}

enum LoopControl {
    Continue,
    Exit,
}

pub async fn run<B>(
    client: Arc<ChatClient<B, Arc<StdioConsole>>>,
    console: Arc<StdioConsole>,
) -> Result<(), StdioError>
where
    B: ChatBackend + 'static,
{
    let mut events = client.subscribe();

    print_banner(&console).await?;
    for entry in client.snapshot().await.entries {
        render_entry(&console, client.strings(), &entry).await?;
    }
    print_help(&console).await?;

    loop {
        console.write("\nAnda> ").await?;
        let line = match console.next_line().await? {
            Some(line) => line,
            None => {
                console
                    .write_line("\nInput STDIN ditutup. Keluar dari mode STDIO.")
                    .await?;
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if matches!(input.chars().next(), Some('/') | Some(':')) {
            match handle_command(input, client.as_ref(), &console, &mut events).await? {
                LoopControl::Continue => continue,
                LoopControl::Exit => break,
            }
        } else {
            handle_prompt(client.as_ref(), &console, &mut events, &line).await?;
        }
    }

    Ok(())
}

async fn handle_command<B: ChatBackend>(
    input: &str,
    client: &ChatClient<B, Arc<StdioConsole>>,
    console: &StdioConsole,
    events: &mut broadcast::Receiver<ViewEvent>,
) -> Result<LoopControl, StdioError> {
    let command = input.trim_start_matches(['/', ':']);
    let name = command
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    debug!(command = %name, "Processing STDIO command");

    match name.as_str() {
        "" => Ok(LoopControl::Continue),
        "help" | "?" => {
            print_help(console).await?;
            Ok(LoopControl::Continue)
        }
        "exit" | "quit" | "keluar" | "q" => {
            console.write_line("Menutup mode STDIO.").await?;
            Ok(LoopControl::Exit)
        }
        "reset" | "clear" => {
            match client.reset_conversation().await {
                ResetOutcome::Reset => {
                    console.write_line("Riwayat chat dihapus.").await?;
                    drain_events(client, console, events).await?;
                }
                ResetOutcome::Declined => {
                    console.write_line("Reset dibatalkan.").await?;
                }
                ResetOutcome::Failed => {}
            }
            Ok(LoopControl::Continue)
        }
        other => {
            console
                .write_line(&format!(
                    "Perintah '{other}' tidak dikenal. Gunakan /help untuk bantuan."
                ))
                .await?;
            Ok(LoopControl::Continue)
        }
    }
}

/// Submit a message, rendering view events while the reply is pending.
async fn handle_prompt<B: ChatBackend>(
    client: &ChatClient<B, Arc<StdioConsole>>,
    console: &StdioConsole,
    events: &mut broadcast::Receiver<ViewEvent>,
    line: &str,
) -> Result<(), StdioError> {
    info!("Processing interactive STDIO chat request");
    let submit = client.submit_message(line);
    tokio::pin!(submit);

    let outcome = loop {
        tokio::select! {
            outcome = &mut submit => break outcome,
            Ok(event) = events.recv() => {
                render_event(console, client.strings(), &event).await?;
            }
        }
    };
    drain_events(client, console, events).await?;

    if outcome == SubmitOutcome::Busy {
        console
            .write_line("Masih menunggu balasan sebelumnya.")
            .await?;
    }
    Ok(())
}

async fn drain_events<B: ChatBackend>(
    client: &ChatClient<B, Arc<StdioConsole>>,
    console: &StdioConsole,
    events: &mut broadcast::Receiver<ViewEvent>,
) -> io::Result<()> {
    loop {
        match events.try_recv() {
            Ok(event) => render_event(console, client.strings(), &event).await?,
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!(skipped, "STDIO renderer fell behind the conversation");
            }
            Err(_) => return Ok(()),
        }
    }
}

async fn render_event(console: &StdioConsole, strings: &UiStrings, event: &ViewEvent) -> io::Result<()> {
    match event {
        ViewEvent::Appended(entry) | ViewEvent::Restored(entry) => {
            render_entry(console, strings, entry).await
        }
        ViewEvent::Removed(_) => Ok(()),
    }
}

async fn render_entry(console: &StdioConsole, strings: &UiStrings, entry: &ViewEntry) -> io::Result<()> {
    match &entry.kind {
        EntryKind::Welcome => {
            console.write_line("").await?;
            console.write_line(&strings.welcome_title).await?;
            console.write_line(&strings.welcome_body).await
        }
        // The user's own line is already on screen.
        EntryKind::Message(message) if message.sender == Sender::User => Ok(()),
        EntryKind::Message(message) => {
            console.write_line("\nAsisten:").await?;
            console.write_line(&message.text).await
        }
        EntryKind::Typing => console.write_line("Asisten sedang mengetik...").await,
    }
}

async fn print_banner(console: &StdioConsole) -> io::Result<()> {
    console.write_line("Mode STDIO interaktif siap digunakan.").await?;
    console
        .write_line("Ketik pesan lalu tekan Enter untuk mengirim.")
        .await
}

async fn print_help(console: &StdioConsole) -> io::Result<()> {
    console.write_line("\nPerintah yang tersedia:").await?;
    console
        .write_line("  /help               Tampilkan bantuan ini")
        .await?;
    console
        .write_line("  /reset              Hapus riwayat chat dan mulai percakapan baru")
        .await?;
    console
        .write_line("  /exit               Keluar dari mode STDIO")
        .await?;
    console
        .write_line("Ketik pesan tanpa awalan / untuk mengirim ke asisten.")
        .await
}

fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "ya" | "yes" | "iya"
    )
}
