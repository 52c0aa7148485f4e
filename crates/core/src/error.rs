use thiserror::Error;

use crate::model::{QuizId, SubjectId};
use crate::session::Screen;

/// Reasons the session state machine refuses an event.
///
/// A rejected event leaves the state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("please select an answer before moving to the next question")]
    AnswerRequired { index: usize },

    #[error("{action} is not available on the {screen} screen")]
    InvalidTransition {
        screen: Screen,
        action: &'static str,
    },

    #[error("no subject at position {0}")]
    UnknownSubject(SubjectId),

    #[error("no quiz at position {0}")]
    UnknownQuiz(QuizId),

    #[error("submit is only available on the last question")]
    NotOnLastQuestion,

    #[error("ignored stale {0} response")]
    StaleResponse(&'static str),
}

impl SessionError {
    /// True for the navigation guard that must be acknowledged by the user.
    #[must_use]
    pub fn is_answer_required(&self) -> bool {
        matches!(self, SessionError::AnswerRequired { .. })
    }
}
