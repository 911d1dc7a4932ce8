//! Chat session state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions.
//! `transition` decides; the session applies the resulting effects.

mod effect;
mod event;
mod state;
mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::ChatState;
pub use transition::{transition, TransitionError};
