//! Modal dialogs for the chat screen
//!
//! The chat client asks for confirmation from a background task; the
//! request travels to the render loop, which shows a modal and answers
//! through a oneshot channel.

use crate::application::interaction::Interaction;
use crate::tui::theme;
use async_trait::async_trait;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

/// A dialog waiting to be shown and answered.
#[derive(Debug)]
pub enum DialogRequest {
    Confirm {
        prompt: String,
        reply: oneshot::Sender<bool>,
    },
    Alert {
        message: String,
        reply: oneshot::Sender<()>,
    },
}

impl DialogRequest {
    pub fn text(&self) -> &str {
        match self {
            DialogRequest::Confirm { prompt, .. } => prompt,
            DialogRequest::Alert { message, .. } => message,
        }
    }

    /// Resolve the dialog. `accepted` is ignored for alerts.
    pub fn answer(self, accepted: bool) {
        match self {
            DialogRequest::Confirm { reply, .. } => {
                let _ = reply.send(accepted);
            }
            DialogRequest::Alert { reply, .. } => {
                let _ = reply.send(());
            }
        }
    }
}

/// [`Interaction`] backed by the chat screen's modal dialogs.
#[derive(Debug, Clone)]
pub struct TuiInteraction {
    tx: mpsc::UnboundedSender<DialogRequest>,
}

impl TuiInteraction {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DialogRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl Interaction for TuiInteraction {
    async fn confirm(&self, prompt: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        let request = DialogRequest::Confirm {
            prompt: prompt.to_string(),
            reply,
        };
        if self.tx.send(request).is_err() {
            debug!("Chat screen closed, treating confirmation as declined");
            return false;
        }
        answer.await.unwrap_or(false)
    }

    async fn notify(&self, message: &str) {
        let (reply, ack) = oneshot::channel();
        let request = DialogRequest::Alert {
            message: message.to_string(),
            reply,
        };
        if self.tx.send(request).is_ok() {
            let _ = ack.await;
        }
    }
}

/// Draw a dialog centered over the chat screen
pub fn render_dialog(frame: &mut Frame, dialog: &DialogRequest) {
    let area = centered_rect(50, 25, frame.area());
    frame.render_widget(Clear, area);

    let (title, hint) = match dialog {
        DialogRequest::Confirm { .. } => (
            " Konfirmasi ",
            Line::from(vec![
                Span::styled("[Y]", theme::key_hint()),
                Span::styled(" Ya   ", theme::footer()),
                Span::styled("[N]", theme::key_destructive()),
                Span::styled(" Batal", theme::footer()),
            ]),
        ),
        DialogRequest::Alert { .. } => (
            " Pemberitahuan ",
            Line::from(Span::styled(
                "Tekan Enter untuk melanjutkan...",
                theme::footer(),
            )),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_active())
        .title(Span::styled(title, theme::title()));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(dialog.text(), theme::text())),
        Line::from(""),
        hint,
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
