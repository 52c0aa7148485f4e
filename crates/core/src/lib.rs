#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod scoring;
pub mod session;

pub use error::SessionError;
pub use scoring::{ReviewItem, ScoreReport};
pub use session::{Screen, SessionEvent, SessionState, reduce};
