//! Server-Sent Events support

use crate::runtime::SessionEvent;
use crate::session::SessionView;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use serde_json::json;
use std::convert::Infallible;
use std::time::Duration;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// Convert broadcast stream to SSE stream
pub fn sse_stream(
    init: SessionView,
    broadcast_rx: tokio::sync::broadcast::Receiver<SessionEvent>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    // Create stream that starts with the current snapshot then broadcasts
    let init = futures::stream::once(async move { Ok(snapshot_event("init", &init)) });

    let broadcasts = BroadcastStream::new(broadcast_rx).filter_map(|result| match result {
        Ok(event) => Some(Ok(session_event_to_axum(&event))),
        Err(_) => None, // Skip lagged messages; the next snapshot supersedes them
    });

    let combined = init.chain(broadcasts);

    Sse::new(combined).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

fn snapshot_event(event_type: &str, view: &SessionView) -> Event {
    let data = json!({
        "type": event_type,
        "session": view,
    });
    Event::default().event(event_type).data(data.to_string())
}

fn session_event_to_axum(event: &SessionEvent) -> Event {
    match event {
        SessionEvent::Update { view } => snapshot_event("update", view),
        SessionEvent::Closed => Event::default()
            .event("closed")
            .data(json!({ "type": "closed" }).to_string()),
    }
}
