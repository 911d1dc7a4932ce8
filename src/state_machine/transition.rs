//! Pure state transition function

use super::{ChatState, Effect, Event};
use crate::transcript::Turn;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ChatState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ChatState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition. All of them leave the session
/// untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Message is empty")]
    EmptyInput,
    #[error("A request is already in flight")]
    Busy,
    #[error("No request is in flight")]
    Stale,
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs, with no I/O.
pub fn transition(state: ChatState, event: Event) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // Idle + Submit -> Pending
        (ChatState::Idle, Event::Submit { text }) => {
            if text.trim().is_empty() {
                return Err(TransitionError::EmptyInput);
            }
            Ok(TransitionResult::new(ChatState::Pending)
                .with_effect(Effect::ClearError)
                .with_effect(Effect::AppendTurn(Turn::user(text.clone())))
                .with_effect(Effect::ClearInput)
                .with_effect(Effect::RequestResponse { prompt: text }))
        }

        // Pending + Submit -> ignored
        (ChatState::Pending, Event::Submit { .. }) => Err(TransitionError::Busy),

        // Pending + reply -> Idle with assistant turn
        (ChatState::Pending, Event::ResponseReady { text }) => Ok(TransitionResult::new(
            ChatState::Idle,
        )
        .with_effect(Effect::AppendTurn(Turn::assistant(text)))),

        // Pending + failure -> Idle with error, no turn
        (ChatState::Pending, Event::RequestFailed { error }) => {
            Ok(TransitionResult::new(ChatState::Idle).with_effect(Effect::ShowError {
                message: error.message().to_string(),
            }))
        }

        // Idle + reply/failure -> stale result, nothing asked for it
        (ChatState::Idle, Event::ResponseReady { .. } | Event::RequestFailed { .. }) => {
            Err(TransitionError::Stale)
        }
    }
}
