//! A single chat session: transcript, pending flag, displayed error, input field
//!
//! The session owns all of its state exclusively. Transitions are decided by
//! [`crate::state_machine::transition`]; this type only applies their effects.

use crate::format::{format_content, FormattedBlock};
use crate::state_machine::{transition, ChatState, Effect, Event, TransitionError};
use crate::transcript::{Role, Transcript, Turn};
use serde::Serialize;

#[derive(Debug)]
pub struct ChatSession {
    id: String,
    transcript: Transcript,
    state: ChatState,
    error: Option<String>,
    input: String,
}

impl ChatSession {
    /// A fresh session, idle, seeded with the welcome turn
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            transcript: Transcript::with_welcome(),
            state: ChatState::Idle,
            error: None,
            input: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Run one event through the state machine and apply its effects.
    ///
    /// Returns the prompt to send when the transition asks for a response.
    /// On error nothing has changed.
    pub fn apply(&mut self, event: Event) -> Result<Option<String>, TransitionError> {
        let result = transition(self.state, event)?;
        self.state = result.new_state;

        let mut request = None;
        for effect in result.effects {
            match effect {
                Effect::ClearError => self.error = None,
                Effect::AppendTurn(turn) => self.transcript.append(turn),
                Effect::ClearInput => self.input.clear(),
                Effect::RequestResponse { prompt } => request = Some(prompt),
                Effect::ShowError { message } => self.error = Some(message),
            }
        }
        Ok(request)
    }

    /// Render-ready snapshot; formatted blocks are recomputed every call.
    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id.clone(),
            turns: self.transcript.turns().iter().map(TurnView::from).collect(),
            pending: self.is_pending(),
            error: self.error().map(str::to_string),
            input: self.input().to_string(),
        }
    }
}

/// Snapshot of a session as the UI shell renders it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub id: String,
    pub turns: Vec<TurnView>,
    pub pending: bool,
    pub error: Option<String>,
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnView {
    pub role: Role,
    pub content: String,
    pub blocks: Vec<FormattedBlock>,
}

impl From<&Turn> for TurnView {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role(),
            content: turn.content().to_string(),
            blocks: format_content(turn.content()),
        }
    }
}
