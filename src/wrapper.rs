//! Response wrapper around the external generation service
//!
//! Wraps the user's question in formatting instructions, makes exactly one
//! provider call, and reduces every failure to a [`RequestError`].

mod error;
mod prompt;

#[cfg(test)]
mod proptests;

pub use error::{RequestError, RequestErrorKind};
pub use prompt::wrap_prompt;

use crate::llm::{LlmConfig, LlmRequest, LlmService};
use std::sync::Arc;

pub struct ResponseWrapper {
    /// `None` when no credential was configured at startup
    service: Option<Arc<dyn LlmService>>,
}

impl ResponseWrapper {
    /// Build from startup configuration. A missing credential is not an
    /// error here; every later call fails with `MissingCredential` instead.
    pub fn new(config: &LlmConfig) -> Self {
        config
            .build_service()
            .map_or_else(Self::without_credential, Self::with_service)
    }

    pub fn with_service(service: Arc<dyn LlmService>) -> Self {
        Self {
            service: Some(service),
        }
    }

    pub fn without_credential() -> Self {
        Self { service: None }
    }

    pub fn is_configured(&self) -> bool {
        self.service.is_some()
    }

    /// Ask the model and return its reply, trimmed and non-empty.
    pub async fn get_response(&self, prompt: &str) -> Result<String, RequestError> {
        let Some(service) = &self.service else {
            tracing::error!("Gemini API key is not configured");
            return Err(RequestErrorKind::MissingCredential.into());
        };

        if prompt.trim().is_empty() {
            return Err(RequestErrorKind::InvalidInput.into());
        }

        let request = LlmRequest::new(wrap_prompt(prompt));
        let response = service.complete(&request).await.map_err(|e| {
            let classified = RequestError::from(&e);
            tracing::warn!(
                error = %e.message,
                upstream_kind = ?e.kind,
                kind = ?classified.kind,
                "Error getting model response"
            );
            classified
        })?;

        let text = response.text.trim();
        if text.is_empty() {
            tracing::warn!(
                finish_reason = ?response.finish_reason,
                "Model returned an empty response"
            );
            return Err(RequestErrorKind::EmptyUpstreamResponse.into());
        }

        Ok(text.to_string())
    }
}
