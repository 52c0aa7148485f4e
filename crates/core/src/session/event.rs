use crate::model::{AnswerChoice, Question, Quiz, QuizId, Subject, SubjectId};

/// Inputs to the session reducer.
///
/// Load completions carry the id they were requested for, so a response that
/// arrives after the user moved on can be recognised and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SubjectsLoaded(Vec<Subject>),
    SubjectSelected(SubjectId),
    QuizzesLoaded {
        subject: SubjectId,
        quizzes: Vec<Quiz>,
    },
    QuizSelected(QuizId),
    QuestionsLoaded {
        quiz: QuizId,
        questions: Vec<Question>,
    },
    AnswerRecorded(AnswerChoice),
    NextRequested,
    PreviousRequested,
    Submitted,
    Reset,
}

impl SessionEvent {
    /// Short name for logs and error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::SubjectsLoaded(_) => "subjects_loaded",
            SessionEvent::SubjectSelected(_) => "select_subject",
            SessionEvent::QuizzesLoaded { .. } => "quizzes_loaded",
            SessionEvent::QuizSelected(_) => "select_quiz",
            SessionEvent::QuestionsLoaded { .. } => "questions_loaded",
            SessionEvent::AnswerRecorded(_) => "record_answer",
            SessionEvent::NextRequested => "next",
            SessionEvent::PreviousRequested => "previous",
            SessionEvent::Submitted => "submit",
            SessionEvent::Reset => "reset",
        }
    }
}
