//! Scroll tests

use webchat_client::tui::screens::chat::ChatState;

#[test]
fn test_scroll_up() {
    let mut state = ChatState::new();
    state.scroll_offset = 5;

    state.scroll_up();
    assert_eq!(state.scroll_offset, 4);
}

#[test]
fn test_scroll_down() {
    let mut state = ChatState::new();
    state.scroll_offset = 5;

    state.scroll_down(100);
    assert_eq!(state.scroll_offset, 6);
}

#[test]
fn test_scroll_down_stops_at_max() {
    let mut state = ChatState::new();
    state.scroll_offset = 7;

    state.scroll_down(7);
    assert_eq!(state.scroll_offset, 7);
}

#[test]
fn test_scroll_to_bottom() {
    let mut state = ChatState::new();
    state.scroll_offset = 10;

    state.scroll_to_bottom();
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn test_scroll_up_at_zero() {
    let mut state = ChatState::new();
    state.scroll_offset = 0;

    state.scroll_up();
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn test_new_state_sticks_to_bottom() {
    let state = ChatState::new();
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn test_new_revision_scrolls_to_newest_entry() {
    let mut state = ChatState::new();
    assert!(state.observe_revision(0));

    state.scroll_offset = 3;
    assert!(!state.observe_revision(0));
    assert_eq!(state.scroll_offset, 3);

    assert!(state.observe_revision(1));
    assert_eq!(state.scroll_offset, u16::MAX);
}
