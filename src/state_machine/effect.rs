//! Effects produced by state transitions

use crate::transcript::Turn;

/// Effects to be executed after state transition, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Drop the currently displayed error
    ClearError,

    /// Append a turn to the transcript
    AppendTurn(Turn),

    /// Empty the input field
    ClearInput,

    /// Ask the response wrapper for a reply (spawns as background task)
    RequestResponse { prompt: String },

    /// Display an error message
    ShowError { message: String },
}
