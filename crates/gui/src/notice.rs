//! The game-over popup: one message at a time, open until dismissed.

use tracing::warn;

#[derive(Clone, Debug, Default)]
pub struct GameOverNotice {
    message: Option<String>,
}

impl GameOverNotice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message`. Opening over an already-open notice is a caller
    /// error by contract; it is logged and the message replaced rather than
    /// stacked.
    pub fn open(&mut self, message: impl Into<String>) {
        let message = message.into();
        if let Some(existing) = &self.message {
            warn!(existing = %existing, "game-over notice opened while already open");
        }
        self.message = Some(message);
    }

    pub fn close(&mut self) {
        self.message = None;
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
#[path = "notice_tests.rs"]
mod notice_tests;
