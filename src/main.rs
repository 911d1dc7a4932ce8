//! Founder's Compass - startup advice chat backed by Gemini
//!
//! Serves the chat session API consumed by the browser shell. Each session
//! keeps its own transcript and forwards one question at a time to the model.

mod api;
mod format;
mod llm;
mod quick_actions;
mod runtime;
mod session;
mod state_machine;
mod transcript;
mod wrapper;

use api::{create_router, AppState};
use llm::LlmConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wrapper::ResponseWrapper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "founders_compass=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration, read once
    let port: u16 = std::env::var("COMPASS_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let session_idle = Duration::from_secs(
        std::env::var("COMPASS_SESSION_IDLE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1800),
    );

    let llm_config = LlmConfig::from_env();
    let wrapper = Arc::new(ResponseWrapper::new(&llm_config));

    if wrapper.is_configured() {
        tracing::info!(model = %llm_config.model(), "Gemini client initialized");
    } else {
        tracing::warn!("No Gemini API key configured. Set GEMINI_API_KEY.");
    }

    let state = AppState::new(wrapper);
    state.sessions.spawn_reaper(session_idle);
    tracing::info!(idle_secs = session_idle.as_secs(), "Session reaper started");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Founder's Compass listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
