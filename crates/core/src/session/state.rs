use std::fmt;

use crate::model::{AnswerChoice, AnswerMap, Question, Quiz, Subject};
use crate::scoring::{self, ReviewItem, ScoreReport};

/// Which screen the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Nothing loaded yet.
    #[default]
    Idle,
    SubjectList,
    QuizList,
    Question,
    Result,
}

impl Screen {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Screen::Idle => "start",
            Screen::SubjectList => "subject list",
            Screen::QuizList => "quiz list",
            Screen::Question => "question",
            Screen::Result => "result",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the session knows. Only [`reduce`](super::reduce) produces new values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub(super) screen: Screen,
    pub(super) subjects: Vec<Subject>,
    pub(super) selected_subject: Option<Subject>,
    pub(super) quizzes: Vec<Quiz>,
    pub(super) selected_quiz: Option<Quiz>,
    pub(super) questions: Vec<Question>,
    pub(super) current_index: usize,
    pub(super) answers: AnswerMap,
    pub(super) result: Option<ScoreReport>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    #[must_use]
    pub fn selected_subject(&self) -> Option<&Subject> {
        self.selected_subject.as_ref()
    }

    #[must_use]
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    #[must_use]
    pub fn selected_quiz(&self) -> Option<&Quiz> {
        self.selected_quiz.as_ref()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Selection recorded for the question currently shown.
    #[must_use]
    pub fn current_answer(&self) -> Option<AnswerChoice> {
        self.answers.get(self.current_index)
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// Index of the final question, `None` when no questions are loaded.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.questions.len().checked_sub(1)
    }

    /// True when the current question is the final one, or there are no questions at all.
    #[must_use]
    pub fn is_on_last_question(&self) -> bool {
        self.last_index().is_none_or(|last| self.current_index >= last)
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.screen == Screen::Question && self.current_index > 0
    }

    #[must_use]
    pub fn show_result(&self) -> bool {
        self.result.is_some()
    }

    /// Correct answers of the last submission, `0` before any submission.
    #[must_use]
    pub fn score(&self) -> usize {
        self.result.map_or(0, |report| report.correct)
    }

    #[must_use]
    pub fn result(&self) -> Option<&ScoreReport> {
        self.result.as_ref()
    }

    /// Per-question review; empty until the quiz has been submitted.
    #[must_use]
    pub fn review(&self) -> Vec<ReviewItem> {
        if self.result.is_none() {
            return Vec::new();
        }
        scoring::review(&self.questions, &self.answers)
    }
}
