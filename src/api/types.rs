//! API request and response types

use crate::quick_actions::QuickAction;
use crate::session::SessionView;
use serde::{Deserialize, Serialize};

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Request to update the input field
#[derive(Debug, Deserialize)]
pub struct InputRequest {
    pub text: String,
}

/// Response with a session snapshot
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: SessionView,
}

/// Response for submit actions
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// False when the text was blank or a request was already pending
    pub accepted: bool,
}

/// Response for lifecycle actions
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Response for the quick action catalogue
#[derive(Debug, Serialize)]
pub struct QuickActionsResponse {
    pub actions: &'static [QuickAction],
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
