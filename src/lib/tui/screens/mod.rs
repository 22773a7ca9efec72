//! TUI screens

pub mod chat;

pub use chat::{TuiError, TuiInteraction, run_chat};
