//! Events that can occur in a chat session

use crate::wrapper::RequestError;

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    // User events
    Submit { text: String },

    // Wrapper events
    ResponseReady { text: String },
    RequestFailed { error: RequestError },
}
