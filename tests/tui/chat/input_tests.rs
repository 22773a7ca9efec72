//! Input handling tests

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use webchat_client::application::composer::Composer;
use webchat_client::tui::screens::chat::{InputAction, handle_input};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn type_text(composer: &mut Composer, text: &str) {
    for c in text.chars() {
        handle_input(composer, press(KeyCode::Char(c)));
    }
}

#[test]
fn test_typing_inserts_characters() {
    let mut composer = Composer::default();
    type_text(&mut composer, "Hai");

    assert_eq!(composer.text, "Hai");
    assert_eq!(composer.cursor_pos, 3);
}

#[test]
fn test_enter_submits_current_text() {
    let mut composer = Composer::default();
    type_text(&mut composer, "Halo");

    let action = handle_input(&mut composer, press(KeyCode::Enter));
    assert_eq!(action, InputAction::Submit("Halo".to_string()));
}

#[test]
fn test_enter_on_empty_input_does_nothing() {
    let mut composer = Composer::default();
    let action = handle_input(&mut composer, press(KeyCode::Enter));
    assert_eq!(action, InputAction::None);
}

#[test]
fn test_enter_while_send_disabled_does_nothing() {
    let mut composer = Composer::default();
    type_text(&mut composer, "Halo");
    composer.send_enabled = false;

    let action = handle_input(&mut composer, press(KeyCode::Enter));
    assert_eq!(action, InputAction::None);
    assert_eq!(composer.text, "Halo");
}

#[test]
fn test_shift_enter_inserts_newline() {
    let mut composer = Composer::default();
    type_text(&mut composer, "a");
    let action = handle_input(
        &mut composer,
        press_with(KeyCode::Enter, KeyModifiers::SHIFT),
    );
    type_text(&mut composer, "b");

    assert_eq!(action, InputAction::None);
    assert_eq!(composer.text, "a\nb");
}

#[test]
fn test_release_events_are_ignored() {
    let mut composer = Composer::default();
    let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;

    handle_input(&mut composer, Event::Key(release));
    assert!(composer.is_empty());
}

#[test]
fn test_paste_inserts_whole_block() {
    let mut composer = Composer::default();
    handle_input(&mut composer, Event::Paste("baris 1\nbaris 2".to_string()));

    assert_eq!(composer.text, "baris 1\nbaris 2");
}

#[test]
fn test_ctrl_r_requests_reset() {
    let mut composer = Composer::default();
    let action = handle_input(
        &mut composer,
        press_with(KeyCode::Char('r'), KeyModifiers::CONTROL),
    );
    assert_eq!(action, InputAction::Reset);
}

#[test]
fn test_ctrl_c_clears_input() {
    let mut composer = Composer::default();
    type_text(&mut composer, "draft");

    handle_input(
        &mut composer,
        press_with(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(composer.is_empty());
    assert_eq!(composer.cursor_pos, 0);
}

#[test]
fn test_q_exits_only_when_input_empty() {
    let mut composer = Composer::default();
    assert_eq!(
        handle_input(&mut composer, press(KeyCode::Char('q'))),
        InputAction::Exit
    );

    type_text(&mut composer, "a");
    assert_eq!(
        handle_input(&mut composer, press(KeyCode::Char('q'))),
        InputAction::None
    );
    assert_eq!(composer.text, "aq");
}

#[test]
fn test_ctrl_q_always_exits() {
    let mut composer = Composer::default();
    type_text(&mut composer, "draft");
    let action = handle_input(
        &mut composer,
        press_with(KeyCode::Char('q'), KeyModifiers::CONTROL),
    );
    assert_eq!(action, InputAction::Exit);
}

#[test]
fn test_backspace_and_cursor_movement() {
    let mut composer = Composer::default();
    type_text(&mut composer, "abc");
    handle_input(&mut composer, press(KeyCode::Left));
    handle_input(&mut composer, press(KeyCode::Backspace));

    assert_eq!(composer.text, "ac");
    assert_eq!(composer.cursor_pos, 1);

    handle_input(&mut composer, press(KeyCode::Home));
    handle_input(&mut composer, press(KeyCode::Delete));
    assert_eq!(composer.text, "c");
}

#[test]
fn test_scroll_keys() {
    let mut composer = Composer::default();
    assert_eq!(
        handle_input(&mut composer, press(KeyCode::PageUp)),
        InputAction::ScrollUp
    );
    assert_eq!(
        handle_input(&mut composer, press(KeyCode::Down)),
        InputAction::ScrollDown
    );
    assert_eq!(
        handle_input(
            &mut composer,
            press_with(KeyCode::Char('u'), KeyModifiers::CONTROL)
        ),
        InputAction::ScrollTop
    );
}
