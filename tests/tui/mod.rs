//! TUI unit tests module
//!
//! - chat/: ChatState, input, scroll, dialog and render tests

pub mod chat;
