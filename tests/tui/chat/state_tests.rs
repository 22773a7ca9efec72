//! Chat state tests

use webchat_client::tui::screens::chat::ChatState;

#[test]
fn test_state_new() {
    let state = ChatState::new();
    assert_eq!(state.loading_frame, 0);
    assert!(state.status_message.is_none());
    assert!(!state.has_dialog());
}

#[test]
fn test_tick_loading_wraps() {
    let mut state = ChatState::new();
    for _ in 0..4 {
        state.tick_loading();
    }
    assert_eq!(state.loading_frame, 0);

    state.tick_loading();
    assert_eq!(state.loading_frame, 1);
}
