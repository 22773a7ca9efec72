//! Dialog queue tests

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::oneshot;
use webchat_client::tui::screens::chat::{ChatState, DialogRequest, handle_dialog_input};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn confirm(prompt: &str) -> (DialogRequest, oneshot::Receiver<bool>) {
    let (reply, answer) = oneshot::channel();
    (
        DialogRequest::Confirm {
            prompt: prompt.to_string(),
            reply,
        },
        answer,
    )
}

#[test]
fn test_yes_accepts_confirmation() {
    let mut state = ChatState::new();
    let (request, mut answer) = confirm("Hapus?");
    state.push_dialog(request);

    handle_dialog_input(&mut state, key(KeyCode::Char('y')));

    assert!(!state.has_dialog());
    assert_eq!(answer.try_recv(), Ok(true));
}

#[test]
fn test_escape_declines_confirmation() {
    let mut state = ChatState::new();
    let (request, mut answer) = confirm("Hapus?");
    state.push_dialog(request);

    handle_dialog_input(&mut state, key(KeyCode::Esc));

    assert_eq!(answer.try_recv(), Ok(false));
}

#[test]
fn test_unrelated_key_keeps_dialog_open() {
    let mut state = ChatState::new();
    let (request, mut answer) = confirm("Hapus?");
    state.push_dialog(request);

    handle_dialog_input(&mut state, key(KeyCode::Char('x')));

    assert!(state.has_dialog());
    assert!(answer.try_recv().is_err());
}

#[test]
fn test_queued_dialog_shown_after_answer() {
    let mut state = ChatState::new();
    let (first, _first_answer) = confirm("Pertama?");
    let (alert_reply, mut alert_ack) = oneshot::channel();
    state.push_dialog(first);
    state.push_dialog(DialogRequest::Alert {
        message: "Gagal mereset chat.".to_string(),
        reply: alert_reply,
    });

    assert_eq!(state.dialog.as_ref().map(|d| d.text()), Some("Pertama?"));
    handle_dialog_input(&mut state, key(KeyCode::Enter));
    assert_eq!(
        state.dialog.as_ref().map(|d| d.text()),
        Some("Gagal mereset chat.")
    );

    handle_dialog_input(&mut state, key(KeyCode::Enter));
    assert!(!state.has_dialog());
    assert_eq!(alert_ack.try_recv(), Ok(()));
}
