//! Chat client
//!
//! Owns the conversation view, the welcome flag and the input affordance,
//! and turns user intents (submit, reset) into backend calls. Every backend
//! failure ends as a bot message or a notification; nothing propagates to
//! the caller.

use super::composer::Composer;
use super::conversation::ConversationView;
use super::interaction::Interaction;
use crate::config::{AppConfig, UiStrings};
use crate::constants::DEFAULT_MAX_INPUT_HEIGHT;
use crate::infrastructure::backend::{ChatBackend, ChatReply, ResetReply};
use crate::types::{EntryId, Message, ViewEntry};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, broadcast};
use tracing::{debug, error, info, warn};

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub strings: UiStrings,
    pub max_input_height: u16,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            strings: UiStrings::default(),
            max_input_height: DEFAULT_MAX_INPUT_HEIGHT,
        }
    }

    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::new()
            .with_strings(config.strings.clone())
            .with_max_input_height(config.max_input_height)
    }

    pub fn with_strings(mut self, strings: UiStrings) -> Self {
        self.strings = strings;
        self
    }

    pub fn with_max_input_height(mut self, height: u16) -> Self {
        self.max_input_height = height;
        self
    }
}

/// How a call to [`ChatClient::submit_message`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened
    Ignored,
    /// Another request is still in flight; nothing happened
    Busy,
    /// The backend answered with a response
    Replied,
    /// The backend reported an application error
    Failed,
    /// The backend could not be reached or answered garbage
    Unreachable,
    /// A reset completed while waiting; the reply was dropped
    Discarded,
}

/// How a call to [`ChatClient::reset_conversation`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Declined,
    Reset,
    Failed,
}

/// Change notifications for surfaces that render incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Appended(ViewEntry),
    Removed(EntryId),
    /// The view was replaced by this single welcome entry
    Restored(ViewEntry),
}

/// Point-in-time copy of the client state for rendering.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub entries: Vec<ViewEntry>,
    pub composer: Composer,
    pub first_message: bool,
    pub sending: bool,
    pub revision: u64,
}

struct ChatSession {
    view: ConversationView,
    /// True while the welcome placeholder is showing
    first_message: bool,
    composer: Composer,
    /// Bumped by every successful reset
    generation: u64,
    /// Bumped by every view mutation
    revision: u64,
}

impl ChatSession {
    fn new(max_input_height: u16) -> Self {
        Self {
            view: ConversationView::new(),
            first_message: true,
            composer: Composer::new(max_input_height),
            generation: 0,
            revision: 0,
        }
    }
}

pub struct ChatClient<B, I> {
    backend: B,
    interaction: I,
    config: ClientConfig,
    session: Mutex<ChatSession>,
    in_flight: AtomicBool,
    events: broadcast::Sender<ViewEvent>,
}

impl<B, I> ChatClient<B, I>
where
    B: ChatBackend,
    I: Interaction,
{
    pub fn new(backend: B, interaction: I, config: ClientConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let session = ChatSession::new(config.max_input_height);
        Self {
            backend,
            interaction,
            config,
            session: Mutex::new(session),
            in_flight: AtomicBool::new(false),
            events,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn strings(&self) -> &UiStrings {
        &self.config.strings
    }

    /// Whether a chat request is outstanding.
    pub fn is_sending(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ViewEvent> {
        self.events.subscribe()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let session = self.session.lock().await;
        SessionSnapshot {
            entries: session.view.entries().to_vec(),
            composer: session.composer.clone(),
            first_message: session.first_message,
            sending: self.is_sending(),
            revision: session.revision,
        }
    }

    /// Run an edit against the input affordance.
    pub async fn edit_input<R>(&self, edit: impl FnOnce(&mut Composer) -> R) -> R {
        let mut session = self.session.lock().await;
        edit(&mut session.composer)
    }

    /// Submit whatever is currently typed in the input affordance.
    pub async fn submit_input(&self) -> SubmitOutcome {
        let text = self.session.lock().await.composer.text.clone();
        self.submit_message(&text).await
    }

    /// Send a user message and render the reply.
    ///
    /// The in-flight guard is taken here, so a second call from any path
    /// returns [`SubmitOutcome::Busy`] until the first one settles.
    pub async fn submit_message(&self, raw: &str) -> SubmitOutcome {
        let text = raw.trim();
        if text.is_empty() {
            debug!("Ignoring empty submission");
            return SubmitOutcome::Ignored;
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Rejecting submission while a request is in flight");
            return SubmitOutcome::Busy;
        }

        let (typing_id, generation) = {
            let mut session = self.session.lock().await;
            if session.first_message {
                if let Some(id) = session.view.remove_welcome() {
                    self.emit(ViewEvent::Removed(id));
                }
                session.first_message = false;
            }

            let entry = session.view.append_message(Message::user(text));
            self.emit(ViewEvent::Appended(entry));

            session.composer.clear();
            session.composer.send_enabled = false;
            session.composer.focused = false;

            let typing = session.view.append_typing();
            self.emit(ViewEvent::Appended(typing.clone()));
            session.revision += 1;
            (typing.id, session.generation)
        };

        info!(chars = text.chars().count(), generation, "Submitting chat message");
        let (reply, outcome) = match self.backend.send_message(text).await {
            Ok(ChatReply::Success(response)) => {
                debug!("Chat request completed successfully");
                (response, SubmitOutcome::Replied)
            }
            Ok(ChatReply::Failure(detail)) => {
                warn!(detail = detail.as_str(), "Backend reported a chat failure");
                (self.config.strings.failure_text(&detail), SubmitOutcome::Failed)
            }
            Err(err) => {
                error!(%err, summary = %err.user_message(), "Chat request failed");
                (
                    self.config.strings.connection_fallback.clone(),
                    SubmitOutcome::Unreachable,
                )
            }
        };

        let outcome = {
            let mut session = self.session.lock().await;
            if session.view.remove_typing(typing_id) {
                self.emit(ViewEvent::Removed(typing_id));
            }

            let outcome = if session.generation == generation {
                let entry = session.view.append_message(Message::bot(reply));
                self.emit(ViewEvent::Appended(entry));
                outcome
            } else {
                info!(
                    issued = generation,
                    current = session.generation,
                    "Discarding reply issued before a reset"
                );
                SubmitOutcome::Discarded
            };

            session.composer.send_enabled = true;
            session.composer.focused = true;
            session.revision += 1;
            outcome
        };

        self.in_flight.store(false, Ordering::Release);
        outcome
    }

    /// Ask for confirmation, then reset the conversation on the backend and
    /// restore the welcome state. The view is left untouched on failure.
    pub async fn reset_conversation(&self) -> ResetOutcome {
        if !self
            .interaction
            .confirm(&self.config.strings.reset_confirm)
            .await
        {
            debug!("Reset declined");
            return ResetOutcome::Declined;
        }

        match self.backend.reset().await {
            Ok(ResetReply::Success) => {
                let mut session = self.session.lock().await;
                let welcome = session.view.restore_welcome();
                session.first_message = true;
                session.generation += 1;
                session.revision += 1;
                info!(generation = session.generation, "Conversation reset");
                self.emit(ViewEvent::Restored(welcome));
                ResetOutcome::Reset
            }
            Ok(ResetReply::Failure(status)) => {
                warn!(status = status.as_str(), "Backend refused to reset");
                self.interaction
                    .notify(&self.config.strings.reset_failed)
                    .await;
                ResetOutcome::Failed
            }
            Err(err) => {
                error!(%err, summary = %err.user_message(), "Reset request failed");
                self.interaction
                    .notify(&self.config.strings.reset_failed)
                    .await;
                ResetOutcome::Failed
            }
        }
    }

    fn emit(&self, event: ViewEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
