//! HTTP request handlers

use super::sse::sse_stream;
use super::types::{
    ChatRequest, ChatResponse, ErrorResponse, InputRequest, QuickActionsResponse,
    SessionResponse, SuccessResponse,
};
use super::AppState;
use crate::quick_actions::QUICK_ACTIONS;
use crate::runtime::RuntimeError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Session lifecycle
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session).delete(close_session))
        // SSE streaming
        .route("/api/sessions/:id/stream", get(stream_session))
        // User actions
        .route("/api/sessions/:id/input", post(set_input))
        .route("/api/sessions/:id/chat", post(send_chat))
        .route(
            "/api/sessions/:id/quick-actions/:action",
            post(run_quick_action),
        )
        // Catalogue
        .route("/api/quick-actions", get(list_quick_actions))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Session Lifecycle
// ============================================================

async fn create_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.sessions.create().await;
    Json(SessionResponse { session })
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.sessions.view(&id).await?;
    Ok(Json(SessionResponse { session }))
}

async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.sessions.close(&id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

async fn stream_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (view, rx) = state.sessions.subscribe(&id).await?;
    Ok(sse_stream(view, rx))
}

// ============================================================
// User Actions
// ============================================================

async fn set_input(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<InputRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.sessions.set_input(&id, req.text).await?;
    Ok(Json(SessionResponse { session }))
}

async fn send_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let accepted = state.sessions.submit(&id, req.text).await?;
    Ok(Json(ChatResponse { accepted }))
}

async fn run_quick_action(
    State(state): State<AppState>,
    Path((id, action)): Path<(String, String)>,
) -> Result<Json<ChatResponse>, AppError> {
    let accepted = state.sessions.run_quick_action(&id, &action).await?;
    Ok(Json(ChatResponse { accepted }))
}

// ============================================================
// Catalogue & Version
// ============================================================

async fn list_quick_actions() -> Json<QuickActionsResponse> {
    Json(QuickActionsResponse {
        actions: QUICK_ACTIONS,
    })
}

async fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    NotFound(String),
}

impl From<RuntimeError> for AppError {
    fn from(error: RuntimeError) -> Self {
        match error {
            RuntimeError::SessionNotFound(_) | RuntimeError::UnknownQuickAction(_) => {
                AppError::NotFound(error.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
