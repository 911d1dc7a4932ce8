//! Chat state types

use serde::Serialize;

/// Chat state
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatState {
    /// Ready for user input, no request in flight
    #[default]
    Idle,

    /// One request in flight; further submissions are ignored
    Pending,
}

impl ChatState {
    pub fn is_pending(self) -> bool {
        matches!(self, ChatState::Pending)
    }
}
