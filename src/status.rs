//! # Status Display
//!
//! The ceremony talks to its surroundings only through [`CeremonyView`]:
//! read the username, show one status message, optionally focus the input.
//! [`StatusBoard`] is a ready-made message region with the transient
//! highlight that fades after a few seconds, and [`FormView`] pairs it with a
//! username field.

use crate::config::ClientConfig;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// One user-visible status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        StatusMessage {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// Everything the ceremony needs from the surrounding form
pub trait CeremonyView: Send + Sync {
    /// Raw username input, untrimmed
    fn username(&self) -> String;

    /// Display the outcome of a ceremony
    fn show(&self, message: StatusMessage);

    /// Reset the display before a new ceremony starts
    fn clear(&self) {}

    /// Called after an empty username was rejected
    fn focus_username(&self) {}
}

#[derive(Debug, Default)]
struct BoardState {
    message: Option<StatusMessage>,
    highlighted: bool,
    // Bumped on every show/clear so stale timers leave the highlight alone
    generation: u64,
}

/// Message region with a timed "active" highlight
///
/// The message persists until replaced or cleared; the highlight drops after
/// `highlight_for`.
#[derive(Debug, Clone)]
pub struct StatusBoard {
    state: Arc<Mutex<BoardState>>,
    highlight_for: Duration,
}

impl StatusBoard {
    pub fn new(highlight_for: Duration) -> Self {
        StatusBoard {
            state: Arc::new(Mutex::new(BoardState::default())),
            highlight_for,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.status_highlight)
    }

    /// Replace the current message and highlight it
    ///
    /// Outside a tokio runtime the highlight has no timer and stays on until
    /// the next `show` or `clear`.
    pub fn show(&self, message: StatusMessage) {
        let generation = {
            let mut state = self.lock();
            state.message = Some(message);
            state.highlighted = true;
            state.generation += 1;
            state.generation
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No runtime, status highlight will not fade");
            return;
        };

        let state = Arc::clone(&self.state);
        let delay = self.highlight_for;
        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.generation == generation {
                state.highlighted = false;
            }
        });
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.message = None;
        state.highlighted = false;
        state.generation += 1;
    }

    pub fn message(&self) -> Option<StatusMessage> {
        self.lock().message.clone()
    }

    pub fn is_highlighted(&self) -> bool {
        self.lock().highlighted
    }

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A username field next to a [`StatusBoard`]
#[derive(Debug, Clone)]
pub struct FormView {
    username: Arc<Mutex<String>>,
    board: StatusBoard,
}

impl FormView {
    pub fn new(board: StatusBoard) -> Self {
        FormView {
            username: Arc::new(Mutex::new(String::new())),
            board,
        }
    }

    pub fn set_username(&self, username: impl Into<String>) {
        *self.username.lock().unwrap_or_else(PoisonError::into_inner) = username.into();
    }

    pub fn board(&self) -> &StatusBoard {
        &self.board
    }
}

impl CeremonyView for FormView {
    fn username(&self) -> String {
        self.username
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn show(&self, message: StatusMessage) {
        self.board.show(message);
    }

    fn clear(&self) {
        self.board.clear();
    }
}
