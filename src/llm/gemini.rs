//! Google Gemini provider implementation

use super::types::{LlmRequest, LlmResponse, Usage};
use super::{LlmError, LlmService};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini service implementation
pub struct GeminiService {
    client: Client,
    api_key: String,
    url: String,
    model_id: String,
}

impl GeminiService {
    pub fn new(api_key: String, model: &str, base_url: &str) -> Result<Self, LlmError> {
        let url = format!(
            "{}/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model
        );

        // No explicit timeout: the transport defaults apply.
        let client = Client::builder()
            .build()
            .map_err(|e| LlmError::unknown(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            url,
            model_id: model.to_string(),
        })
    }

    fn translate_request(request: &LlmRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(request.prompt.clone()),
                }],
            }],
        }
    }

    /// Concatenate the text parts of the first candidate.
    ///
    /// A response without candidates (safety block, empty generation) yields
    /// empty text rather than an error; callers decide what empty means.
    fn normalize_response(resp: GeminiResponse) -> LlmResponse {
        let usage = Usage {
            input_tokens: u64::from(resp.usage_metadata.prompt_token_count),
            output_tokens: u64::from(resp.usage_metadata.candidates_token_count),
        };

        let Some(candidate) = resp.candidates.into_iter().next() else {
            return LlmResponse {
                text: String::new(),
                finish_reason: None,
                usage,
            };
        };

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        LlmResponse {
            text,
            finish_reason: candidate.finish_reason,
            usage,
        }
    }
}

/// Classify an upstream error response.
///
/// Google reports a gRPC-style `status` string next to the HTTP code, and an
/// invalid key comes back as a plain 400, so the message is checked too.
fn classify_error(status: u16, error: &GeminiError) -> LlmError {
    let message = &error.message;
    let grpc_status = error.status.as_deref().unwrap_or_default();

    if matches!(status, 401 | 403)
        || matches!(grpc_status, "UNAUTHENTICATED" | "PERMISSION_DENIED")
        || message.contains("API key")
    {
        return LlmError::auth(format!("Authentication failed: {message}"));
    }
    if status == 429 || grpc_status == "RESOURCE_EXHAUSTED" {
        return LlmError::rate_limit(format!("Rate limit exceeded: {message}"));
    }
    match status {
        400 => LlmError::invalid_request(format!("Invalid request: {message}")),
        500..=599 => LlmError::server_error(format!("Server error: {message}")),
        _ => LlmError::unknown(format!("HTTP {status}: {message}")),
    }
}

/// Classify a failure to get any response back.
///
/// A connection dropped mid-request surfaces as a request or body error, not
/// a connect error, so those count as network failures too.
fn classify_transport_error(e: &reqwest::Error) -> LlmError {
    if e.is_timeout() {
        LlmError::network(format!("Request timeout: {e}"))
    } else if e.is_connect() {
        LlmError::network(format!("Connection failed: {e}"))
    } else if e.is_request() || e.is_body() {
        LlmError::network(format!("Connection lost: {e}"))
    } else {
        LlmError::unknown(format!("Request failed: {e}"))
    }
}

#[async_trait]
impl LlmService for GeminiService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let gemini_request = Self::translate_request(request);

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            // Proxies and gateways answer with HTML or plain text; the status
            // still classifies.
            let error = serde_json::from_str::<GeminiErrorResponse>(&body).map_or_else(
                |_| GeminiError {
                    message: body.clone(),
                    status: None,
                },
                |resp| resp.error,
            );
            return Err(classify_error(status.as_u16(), &error));
        }

        let gemini_response: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            LlmError::unknown(format!("Failed to parse response: {e} - body: {body}"))
        })?;

        Ok(Self::normalize_response(gemini_response))
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: GeminiUsageMetadata,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
    status: Option<String>,
}
