//! Chat input handling

use super::state::ChatState;
use crate::application::composer::Composer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Submit the given input
    Submit(String),
    /// Ask to reset the conversation
    Reset,
    /// Exit the chat
    Exit,
    /// Scroll up
    ScrollUp,
    /// Scroll down
    ScrollDown,
    /// Scroll to top
    ScrollTop,
    /// Scroll to bottom
    ScrollBottom,
}

/// Handle keyboard input, editing the composer in place
pub fn handle_input(composer: &mut Composer, event: Event) -> InputAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(composer, key),
        Event::Paste(text) => {
            text.chars().for_each(|c| composer.insert_char(c));
            InputAction::None
        }
        _ => InputAction::None,
    }
}

fn handle_key(composer: &mut Composer, key: KeyEvent) -> InputAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('q') {
        return InputAction::Exit;
    }
    if key.code == KeyCode::Char('q') && composer.is_empty() {
        return InputAction::Exit;
    }
    if ctrl && key.code == KeyCode::Char('c') {
        composer.clear();
        return InputAction::None;
    }
    if ctrl && key.code == KeyCode::Char('r') {
        return InputAction::Reset;
    }

    match key.code {
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
        {
            composer.insert_newline();
            InputAction::None
        }
        KeyCode::Enter => {
            // Send affordance is disabled while a reply is pending
            if composer.is_empty() || !composer.send_enabled {
                return InputAction::None;
            }
            InputAction::Submit(composer.text.clone())
        }
        KeyCode::Esc => {
            composer.clear();
            InputAction::None
        }
        KeyCode::Backspace => {
            composer.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            composer.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            composer.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            composer.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            composer.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            composer.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Char('u') if ctrl => InputAction::ScrollTop,
        KeyCode::Char('d') if ctrl => InputAction::ScrollBottom,
        KeyCode::Char(c) => {
            composer.insert_char(c);
            InputAction::None
        }
        KeyCode::Tab => {
            composer.insert_char(' ');
            composer.insert_char(' ');
            InputAction::None
        }
        _ => InputAction::None,
    }
}

/// Keys while a dialog is open: y/Enter accept, n/Esc decline.
pub fn handle_dialog_input(state: &mut ChatState, event: Event) {
    let Event::Key(key) = event else {
        return;
    };
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => state.answer_dialog(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => state.answer_dialog(false),
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.answer_dialog(false)
        }
        _ => {}
    }
}
