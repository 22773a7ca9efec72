//! # Application Module
//!
//! Chat client logic, independent of how the conversation is drawn.
//!
//! ## Submodules
//!
//! - [`client`] - The chat client driving the send/receive/reset flow
//! - [`conversation`] - Ordered list of rendered chat entries
//! - [`composer`] - Input affordance state and auto-resize
//! - [`interaction`] - Injectable confirmation and notification
//! - [`stdio`] - Standard input/output interface for command-line interaction

pub mod client;
pub mod composer;
pub mod conversation;
pub mod interaction;
pub mod stdio;
