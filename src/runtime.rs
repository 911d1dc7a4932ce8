//! Runtime for live chat sessions
//!
//! Owns every session, runs the one outstanding wrapper call per session as a
//! background task, and broadcasts a fresh snapshot after each change.
//! Sessions nobody is streaming or touching are reaped after an idle period.

use crate::quick_actions;
use crate::session::{ChatSession, SessionView};
use crate::state_machine::{Event, TransitionError};
use crate::wrapper::ResponseWrapper;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{broadcast, Mutex, RwLock};
use tokio::time::Instant;

const BROADCAST_CAPACITY: usize = 64;

/// Shortest pause between reaper sweeps
const MIN_REAP_PERIOD: Duration = Duration::from_millis(10);

/// Events sent to subscribers (SSE clients)
#[derive(Debug, Clone)]
pub enum SessionEvent {
    Update { view: SessionView },
    Closed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),
    #[error("Unknown quick action: {0}")]
    UnknownQuickAction(String),
}

/// Handle to interact with a live session
#[derive(Clone)]
struct SessionHandle {
    session: Arc<Mutex<ChatSession>>,
    broadcast_tx: broadcast::Sender<SessionEvent>,
    last_active: Arc<std::sync::Mutex<Instant>>,
}

impl SessionHandle {
    fn new(session: ChatSession) -> Self {
        let (broadcast_tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            session: Arc::new(Mutex::new(session)),
            broadcast_tx,
            last_active: Arc::new(std::sync::Mutex::new(Instant::now())),
        }
    }

    fn notify(&self, view: SessionView) {
        // No subscribers is fine
        let _ = self.broadcast_tx.send(SessionEvent::Update { view });
    }

    fn touch(&self) {
        if let Ok(mut last_active) = self.last_active.lock() {
            *last_active = Instant::now();
        }
    }

    /// Idle for at least `max_idle` with no open stream
    fn is_abandoned(&self, max_idle: Duration) -> bool {
        if self.broadcast_tx.receiver_count() > 0 {
            return false;
        }
        self.last_active
            .lock()
            .is_ok_and(|last_active| last_active.elapsed() >= max_idle)
    }
}

/// Manager for all chat sessions
pub struct SessionManager {
    wrapper: Arc<ResponseWrapper>,
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl SessionManager {
    pub fn new(wrapper: Arc<ResponseWrapper>) -> Self {
        Self {
            wrapper,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Start a new session seeded with the welcome turn
    pub async fn create(&self) -> SessionView {
        let id = uuid::Uuid::new_v4().to_string();
        let session = ChatSession::new(id.clone());
        let view = session.view();

        let mut sessions = self.sessions.write().await;
        sessions.insert(id, SessionHandle::new(session));
        tracing::info!(session_id = %view.id, live_sessions = sessions.len(), "Session created");
        view
    }

    /// Look up a session and mark it active
    async fn handle(&self, id: &str) -> Result<SessionHandle, RuntimeError> {
        let handle = self
            .sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| RuntimeError::SessionNotFound(id.to_string()))?;
        handle.touch();
        Ok(handle)
    }

    pub async fn view(&self, id: &str) -> Result<SessionView, RuntimeError> {
        let handle = self.handle(id).await?;
        let session = handle.session.lock().await;
        Ok(session.view())
    }

    /// Current view plus a receiver for every later change
    pub async fn subscribe(
        &self,
        id: &str,
    ) -> Result<(SessionView, broadcast::Receiver<SessionEvent>), RuntimeError> {
        let handle = self.handle(id).await?;
        // Subscribe under the lock so no update slips between view and receiver
        let session = handle.session.lock().await;
        Ok((session.view(), handle.broadcast_tx.subscribe()))
    }

    pub async fn set_input(&self, id: &str, text: String) -> Result<SessionView, RuntimeError> {
        let handle = self.handle(id).await?;
        let mut session = handle.session.lock().await;
        session.set_input(text);
        let view = session.view();
        handle.notify(view.clone());
        Ok(view)
    }

    /// Submit a message. Returns whether it was accepted; blank text and
    /// submissions while a request is pending are silently ignored.
    pub async fn submit(&self, id: &str, text: String) -> Result<bool, RuntimeError> {
        let handle = self.handle(id).await?;
        let mut session = handle.session.lock().await;

        let prompt = match session.apply(Event::Submit { text }) {
            Ok(prompt) => prompt,
            Err(TransitionError::Busy) => {
                tracing::debug!(session_id = %id, "Submission ignored, request pending");
                return Ok(false);
            }
            Err(e) => {
                tracing::debug!(session_id = %id, reason = %e, "Submission ignored");
                return Ok(false);
            }
        };

        handle.notify(session.view());
        drop(session);

        if let Some(prompt) = prompt {
            self.spawn_request(id, &handle, prompt);
        }
        Ok(true)
    }

    /// Submit a canned prompt, exactly as if it had been typed
    pub async fn run_quick_action(&self, id: &str, action_id: &str) -> Result<bool, RuntimeError> {
        let action = quick_actions::find(action_id)
            .ok_or_else(|| RuntimeError::UnknownQuickAction(action_id.to_string()))?;
        self.submit(id, action.prompt.to_string()).await
    }

    /// End a session. A reply still in flight is discarded when it lands.
    pub async fn close(&self, id: &str) -> Result<(), RuntimeError> {
        let handle = self
            .sessions
            .write()
            .await
            .remove(id)
            .ok_or_else(|| RuntimeError::SessionNotFound(id.to_string()))?;
        let _ = handle.broadcast_tx.send(SessionEvent::Closed);
        tracing::info!(session_id = %id, "Session closed");
        Ok(())
    }

    /// Close every session idle for at least `max_idle` with no open stream.
    /// Returns how many were closed.
    pub async fn reap_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let abandoned: Vec<String> = sessions
            .iter()
            .filter(|(_, handle)| handle.is_abandoned(max_idle))
            .map(|(id, _)| id.clone())
            .collect();

        for id in &abandoned {
            if let Some(handle) = sessions.remove(id) {
                let _ = handle.broadcast_tx.send(SessionEvent::Closed);
                tracing::info!(session_id = %id, "Idle session reaped");
            }
        }
        if !abandoned.is_empty() {
            tracing::debug!(
                reaped = abandoned.len(),
                live_sessions = sessions.len(),
                "Reaper sweep"
            );
        }
        abandoned.len()
    }

    /// Periodically reap idle sessions until the manager is dropped
    pub fn spawn_reaper(self: &Arc<Self>, max_idle: Duration) {
        let manager = Arc::downgrade(self);
        let period = (max_idle / 2).max(MIN_REAP_PERIOD);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let Some(manager) = manager.upgrade() else {
                    break;
                };
                manager.reap_idle(max_idle).await;
            }
        });
    }

    fn spawn_request(&self, id: &str, handle: &SessionHandle, prompt: String) {
        let wrapper = Arc::clone(&self.wrapper);
        // Weak: a closed session must not be kept alive by its own request.
        let session = Arc::downgrade(&handle.session);
        let broadcast_tx = handle.broadcast_tx.clone();
        let id = id.to_string();

        tokio::spawn(async move {
            let event = match wrapper.get_response(&prompt).await {
                Ok(text) => Event::ResponseReady { text },
                Err(error) => Event::RequestFailed { error },
            };

            let Some(session) = session.upgrade() else {
                tracing::debug!(session_id = %id, "Session gone, discarding response");
                return;
            };

            let mut session = session.lock().await;
            if let Err(e) = session.apply(event) {
                tracing::warn!(session_id = %id, error = %e, "Dropping unexpected response");
                return;
            }
            tracing::debug!(
                session_id = %session.id(),
                turns = session.transcript().len(),
                "Response applied"
            );
            let _ = broadcast_tx.send(SessionEvent::Update {
                view: session.view(),
            });
        });
    }
}
