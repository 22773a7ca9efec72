//! Chat runner - main event loop coordinator

use super::dialog::{DialogRequest, TuiInteraction};
use super::input::{InputAction, handle_dialog_input, handle_input};
use super::state::ChatState;
use super::ui::{ChatUI, INPUT_CHROME_WIDTH};
use crate::application::client::{ChatClient, ResetOutcome, SubmitOutcome};
use crate::infrastructure::backend::ChatBackend;
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcomes of background tasks, reported back to the loop
enum TaskEvent {
    Submitted(SubmitOutcome),
    Reset(ResetOutcome),
}

/// Run the TUI chat interface until the user exits
pub async fn run_chat<B>(
    client: Arc<ChatClient<B, TuiInteraction>>,
    dialogs: mpsc::UnboundedReceiver<DialogRequest>,
    endpoint: &str,
) -> Result<(), TuiError>
where
    B: ChatBackend + 'static,
{
    let mut terminal = init_terminal()?;
    let mut state = ChatState::new();

    let result = run_chat_loop(&mut terminal, &mut state, client, dialogs, endpoint).await;

    restore_terminal()?;
    result
}

async fn run_chat_loop<B>(
    terminal: &mut Tui,
    state: &mut ChatState,
    client: Arc<ChatClient<B, TuiInteraction>>,
    mut dialogs: mpsc::UnboundedReceiver<DialogRequest>,
    endpoint: &str,
) -> Result<(), TuiError>
where
    B: ChatBackend + 'static,
{
    let (task_tx, mut task_rx) = mpsc::unbounded_channel::<TaskEvent>();

    loop {
        while let Ok(request) = dialogs.try_recv() {
            state.push_dialog(request);
        }
        while let Ok(event) = task_rx.try_recv() {
            apply_task_event(state, event);
        }

        let snapshot = client.snapshot().await;
        state.observe_revision(snapshot.revision);
        terminal.draw(|frame| {
            ChatUI::render(frame, state, &snapshot, client.strings(), endpoint);
        })?;

        let timeout = if snapshot.sending {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if !event::poll(timeout)? {
            if snapshot.sending {
                state.tick_loading();
            }
            continue;
        }

        let event = event::read()?;
        if state.has_dialog() {
            handle_dialog_input(state, event);
            continue;
        }

        let width = terminal.size()?.width.saturating_sub(INPUT_CHROME_WIDTH);
        let action = client
            .edit_input(|composer| {
                let action = handle_input(composer, event);
                composer.auto_resize(width);
                action
            })
            .await;

        match action {
            InputAction::Exit => return Ok(()),
            InputAction::Submit(text) => {
                state.status_message = None;
                let client = client.clone();
                let tx = task_tx.clone();
                tokio::spawn(async move {
                    let outcome = client.submit_message(&text).await;
                    let _ = tx.send(TaskEvent::Submitted(outcome));
                });
            }
            InputAction::Reset => {
                let client = client.clone();
                let tx = task_tx.clone();
                tokio::spawn(async move {
                    let outcome = client.reset_conversation().await;
                    let _ = tx.send(TaskEvent::Reset(outcome));
                });
            }
            InputAction::ScrollUp => {
                // Leave the sticky-bottom sentinel before stepping up
                state.scroll_offset = state.scroll_offset.min(state.max_scroll);
                state.scroll_up();
            }
            InputAction::ScrollDown => {
                let max_scroll = state.max_scroll;
                state.scroll_down(max_scroll);
            }
            InputAction::ScrollTop => state.scroll_offset = 0,
            InputAction::ScrollBottom => state.scroll_to_bottom(),
            InputAction::None => {}
        }
    }
}

fn apply_task_event(state: &mut ChatState, event: TaskEvent) {
    match event {
        TaskEvent::Submitted(outcome) => {
            debug!(?outcome, "Submission settled");
            state.status_message = match outcome {
                SubmitOutcome::Busy => Some("Masih menunggu balasan sebelumnya".to_string()),
                SubmitOutcome::Unreachable => Some("Server tidak dapat dihubungi".to_string()),
                _ => None,
            };
        }
        TaskEvent::Reset(outcome) => {
            debug!(?outcome, "Reset settled");
            state.status_message = match outcome {
                ResetOutcome::Reset => Some("Riwayat chat dihapus".to_string()),
                ResetOutcome::Declined | ResetOutcome::Failed => None,
            };
        }
    }
}
