//! TUI module for the terminal chat surface using Ratatui

pub mod screens;
mod terminal;
pub mod theme;

pub use screens::{TuiError, TuiInteraction, run_chat};
pub use terminal::{Tui, restore_terminal};
