//! HTTP API for the chat UI shell

mod handlers;
mod sse;
mod types;

pub use handlers::create_router;

use crate::runtime::SessionManager;
use crate::wrapper::ResponseWrapper;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    pub fn new(wrapper: Arc<ResponseWrapper>) -> Self {
        Self {
            sessions: Arc::new(SessionManager::new(wrapper)),
        }
    }
}
