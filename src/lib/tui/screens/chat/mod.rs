//! TUI Chat interface module
//!
//! - state.rs: scroll position, animation and queued dialogs
//! - ui.rs: rendering
//! - input.rs: key handling against the composer
//! - dialog.rs: confirmation and alert modals
//! - runner.rs: coordinates the components

mod dialog;
mod input;
mod runner;
mod state;
mod ui;

// Re-exports
pub use dialog::{DialogRequest, TuiInteraction};
pub use input::{InputAction, handle_dialog_input, handle_input};
pub use runner::{TuiError, run_chat};
pub use state::ChatState;
pub use ui::ChatUI;
