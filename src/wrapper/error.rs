//! User-facing request errors

use crate::llm::{LlmError, LlmErrorKind};
use thiserror::Error;

/// Failure classes surfaced to the chat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorKind {
    MissingCredential,
    InvalidInput,
    EmptyUpstreamResponse,
    AuthRejected,
    NetworkFailure,
    QuotaExceeded,
    Unknown,
}

impl RequestErrorKind {
    /// The fixed message shown to the user for this kind
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingCredential => {
                "API key not configured. Please check your environment settings."
            }
            Self::InvalidInput => "Please provide a valid question or prompt.",
            Self::EmptyUpstreamResponse => {
                "Received an empty response from the assistant. Please try again."
            }
            Self::AuthRejected => "Invalid API key. Please check your configuration.",
            Self::NetworkFailure => "Network error. Please check your internet connection.",
            Self::QuotaExceeded => "API quota exceeded. Please try again later.",
            Self::Unknown => "An unexpected error occurred. Please try again.",
        }
    }
}

/// A classified request failure. Displays as its fixed message only; the
/// upstream detail is logged where the error is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .kind.message())]
pub struct RequestError {
    pub kind: RequestErrorKind,
}

impl RequestError {
    pub fn new(kind: RequestErrorKind) -> Self {
        Self { kind }
    }

    pub fn message(self) -> &'static str {
        self.kind.message()
    }
}

impl From<RequestErrorKind> for RequestError {
    fn from(kind: RequestErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<&LlmError> for RequestError {
    fn from(error: &LlmError) -> Self {
        let kind = match error.kind {
            LlmErrorKind::Auth => RequestErrorKind::AuthRejected,
            LlmErrorKind::Network => RequestErrorKind::NetworkFailure,
            LlmErrorKind::RateLimit => RequestErrorKind::QuotaExceeded,
            LlmErrorKind::ServerError | LlmErrorKind::InvalidRequest | LlmErrorKind::Unknown => {
                classify_message(&error.message)
            }
        };
        Self::new(kind)
    }
}

/// Approximate classification from upstream text, for errors that carry no
/// structured kind.
fn classify_message(message: &str) -> RequestErrorKind {
    let lower = message.to_lowercase();
    if lower.contains("api key") {
        RequestErrorKind::AuthRejected
    } else if lower.contains("network") {
        RequestErrorKind::NetworkFailure
    } else if lower.contains("quota") {
        RequestErrorKind::QuotaExceeded
    } else {
        RequestErrorKind::Unknown
    }
}
