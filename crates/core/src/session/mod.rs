//! Quiz session state machine.
//!
//! `SessionState` is a plain value. Every change goes through [`reduce`], which
//! takes the current state and one [`SessionEvent`] and returns the next state,
//! or a [`SessionError`](crate::SessionError) that leaves the old state in place.

mod event;
mod reducer;
mod state;

pub use event::SessionEvent;
pub use reducer::reduce;
pub use state::{Screen, SessionState};
