//! Conversation turns and the append-only transcript

use serde::Serialize;

/// Greeting every new session starts with
pub const WELCOME_MESSAGE: &str = "**Welcome to Founder's Compass!**\n\nI'm your AI startup assistant, ready to help you navigate your entrepreneurial journey. How can I assist you today?\n\n- Validate your business ideas\n- Develop growth strategies\n- Find the right co-founder\n- Plan your fundraising approach\n- Optimize your go-to-market strategy";

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Chronological turn history. Grows by append only; existing turns are
/// never reordered or modified.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript holding just the assistant greeting
    pub fn with_welcome() -> Self {
        let mut transcript = Self::new();
        transcript.append(Turn::assistant(WELCOME_MESSAGE));
        transcript
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }
}
