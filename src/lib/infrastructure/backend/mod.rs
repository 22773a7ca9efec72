//! Chat backend access
//!
//! The backend is an external HTTP service exposing `/api/chat` and
//! `/api/reset`. `ChatBackend` is the seam the chat client depends on;
//! `HttpBackend` is the reqwest implementation.

mod http;
mod traits;
mod types;

pub use http::HttpBackend;
pub use traits::ChatBackend;
pub use types::{BackendError, ChatReply, ResetReply};
