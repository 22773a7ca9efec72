//! Rendering tests against a TestBackend

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use webchat_client::application::client::SessionSnapshot;
use webchat_client::application::composer::Composer;
use webchat_client::config::UiStrings;
use webchat_client::tui::screens::chat::{ChatState, ChatUI};
use webchat_client::types::{EntryId, EntryKind, Message, ViewEntry};

fn long_reply(index: usize) -> String {
    format!("{}AKHIR{index}", "kata ".repeat(60))
}

fn conversation(pairs: usize) -> Vec<ViewEntry> {
    let mut entries = Vec::new();
    for index in 0..pairs {
        entries.push(ViewEntry {
            id: EntryId(entries.len() as u64),
            kind: EntryKind::Message(Message::user(format!("pertanyaan {index}"))),
        });
        entries.push(ViewEntry {
            id: EntryId(entries.len() as u64),
            kind: EntryKind::Message(Message::bot(long_reply(index))),
        });
    }
    entries
}

fn snapshot(entries: Vec<ViewEntry>, composer: Composer) -> SessionSnapshot {
    SessionSnapshot {
        entries,
        composer,
        first_message: false,
        sending: false,
        revision: 1,
    }
}

fn render(state: &mut ChatState, snapshot: &SessionSnapshot) -> String {
    let mut terminal = Terminal::new(TestBackend::new(40, 24)).expect("terminal");
    terminal
        .draw(|frame| {
            ChatUI::render(
                frame,
                state,
                snapshot,
                &UiStrings::default(),
                "http://127.0.0.1:5000",
            )
        })
        .expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_newest_wrapped_reply_visible_after_auto_scroll() {
    let snapshot = snapshot(conversation(3), Composer::default());
    let mut state = ChatState::new();
    state.observe_revision(snapshot.revision);

    let screen = render(&mut state, &snapshot);

    assert!(state.max_scroll > 0);
    assert_eq!(state.scroll_offset, state.max_scroll);
    assert!(screen.contains("AKHIR2"));
}

#[test]
fn test_scrolling_down_reaches_wrapped_tail() {
    let snapshot = snapshot(conversation(3), Composer::default());
    let mut state = ChatState::new();
    render(&mut state, &snapshot);

    state.scroll_offset = 0;
    let top = render(&mut state, &snapshot);
    assert!(top.contains("pertanyaan 0"));
    assert!(!top.contains("AKHIR2"));

    let max_scroll = state.max_scroll;
    for _ in 0..max_scroll {
        state.scroll_down(max_scroll);
    }
    let bottom = render(&mut state, &snapshot);
    assert!(bottom.contains("AKHIR2"));
}

#[test]
fn test_short_conversation_needs_no_scroll() {
    let entries = vec![ViewEntry {
        id: EntryId(0),
        kind: EntryKind::Message(Message::bot("halo")),
    }];
    let snapshot = snapshot(entries, Composer::default());
    let mut state = ChatState::new();

    let screen = render(&mut state, &snapshot);

    assert_eq!(state.max_scroll, 0);
    assert_eq!(state.scroll_offset, 0);
    assert!(screen.contains("halo"));
}

#[test]
fn test_wrapped_input_keeps_its_end_in_view() {
    let mut composer = Composer::new(2);
    composer.set_text(format!("{}UJUNG", "kata ".repeat(30)));
    composer.auto_resize(36);
    assert_eq!(composer.height, 2);
    let snapshot = snapshot(Vec::new(), composer);
    let mut state = ChatState::new();

    let screen = render(&mut state, &snapshot);

    assert!(screen.contains("UJUNG"));
}
