//! Chat palette
//!
//! Cyan marks the user and focus, green the assistant and safe keys,
//! amber anything still pending, red destructive keys.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(100, 180, 220);

/// Pending replies and the typing indicator
pub const PENDING: Color = Color::Rgb(255, 200, 100);

pub const ASSISTANT: Color = Color::Rgb(130, 200, 130);

pub const DESTRUCTIVE: Color = Color::Rgb(220, 100, 100);

/// Timestamps, hints, placeholders
pub const MUTED: Color = Color::Rgb(100, 100, 110);

pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Header/title style
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Secondary text, also used for a disabled composer
pub fn subtitle() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Border of the focused composer and open dialogs
pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

pub fn footer() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::DIM)
}

pub fn loading() -> Style {
    Style::default().fg(PENDING).add_modifier(Modifier::ITALIC)
}

/// Header of the user's messages
pub fn user_prefix() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Header of the assistant's messages
pub fn ai_prefix() -> Style {
    Style::default().fg(ASSISTANT).add_modifier(Modifier::BOLD)
}

pub fn key_hint() -> Style {
    Style::default().fg(ASSISTANT)
}

pub fn key_destructive() -> Style {
    Style::default().fg(DESTRUCTIVE)
}
