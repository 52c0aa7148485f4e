use std::fmt;
use std::sync::Arc;

use quiz_core::model::{AnswerChoice, QuizId, SubjectId};
use quiz_core::{Screen, ScoreReport, SessionError, SessionEvent, SessionState, reduce};

use crate::catalog;
use crate::config::QuizConfig;
use crate::fetcher::DataFetcher;

/// Outcome of a load operation.
///
/// Fetch failures are logged and reported here instead of as errors; the
/// session simply stays where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    Failed,
    /// The response arrived after the selection changed and was dropped.
    Stale,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Owns the session state and drives it with fetched data and user actions.
pub struct SessionController {
    fetcher: Arc<dyn DataFetcher>,
    subjects_url: String,
    state: SessionState,
}

impl SessionController {
    #[must_use]
    pub fn new(fetcher: Arc<dyn DataFetcher>, config: &QuizConfig) -> Self {
        Self {
            fetcher,
            subjects_url: config.subjects_url.clone(),
            state: SessionState::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Apply a single event through the reducer.
    ///
    /// # Errors
    ///
    /// Returns the reducer's `SessionError`; the state is unchanged in that case.
    pub fn dispatch(&mut self, event: SessionEvent) -> Result<(), SessionError> {
        let name = event.name();
        let next = reduce(&self.state, event).inspect_err(|err| {
            tracing::debug!(event = name, screen = %self.state.screen(), error = %err, "session event rejected");
        })?;
        self.state = next;
        tracing::debug!(event = name, screen = %self.state.screen(), "session event applied");
        Ok(())
    }

    /// Fetch the subject index and show the subject list.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside the start and subject screens.
    pub async fn load_subjects(&mut self) -> Result<LoadStatus, SessionError> {
        let screen = self.state.screen();
        if !matches!(screen, Screen::Idle | Screen::SubjectList) {
            return Err(SessionError::InvalidTransition {
                screen,
                action: "load_subjects",
            });
        }

        match catalog::fetch_subjects(self.fetcher.as_ref(), &self.subjects_url).await {
            Ok(subjects) => {
                let count = subjects.len();
                let status = self.complete(SessionEvent::SubjectsLoaded(subjects))?;
                if status == LoadStatus::Loaded {
                    tracing::info!(count, "subjects loaded");
                }
                Ok(status)
            }
            Err(err) => {
                tracing::warn!(url = %self.subjects_url, error = %err, "error loading subjects");
                Ok(LoadStatus::Failed)
            }
        }
    }

    /// Select a subject and fetch its quiz list.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the subject cannot be selected on the current screen.
    pub async fn select_subject(&mut self, id: SubjectId) -> Result<LoadStatus, SessionError> {
        self.dispatch(SessionEvent::SubjectSelected(id))?;
        let Some(subject) = self.state.selected_subject().cloned() else {
            return Err(SessionError::UnknownSubject(id));
        };

        match catalog::fetch_quizzes(self.fetcher.as_ref(), subject.quizzes_url()).await {
            Ok(quizzes) => {
                let count = quizzes.len();
                let status = self.complete(SessionEvent::QuizzesLoaded {
                    subject: id,
                    quizzes,
                })?;
                if status == LoadStatus::Loaded {
                    tracing::info!(subject = subject.name(), count, "quizzes loaded");
                }
                Ok(status)
            }
            Err(err) => {
                tracing::warn!(
                    subject = subject.name(),
                    url = subject.quizzes_url(),
                    error = %err,
                    "error loading quizzes"
                );
                Ok(LoadStatus::Failed)
            }
        }
    }

    /// Select a quiz and fetch its questions. A successful load starts a fresh attempt.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the quiz cannot be selected on the current screen.
    pub async fn select_quiz(&mut self, id: QuizId) -> Result<LoadStatus, SessionError> {
        self.dispatch(SessionEvent::QuizSelected(id))?;
        let Some(quiz) = self.state.selected_quiz().cloned() else {
            return Err(SessionError::UnknownQuiz(id));
        };

        match catalog::fetch_questions(self.fetcher.as_ref(), quiz.questions_url()).await {
            Ok(questions) => {
                let count = questions.len();
                let status = self.complete(SessionEvent::QuestionsLoaded {
                    quiz: id,
                    questions,
                })?;
                if status == LoadStatus::Loaded {
                    tracing::info!(quiz = quiz.title(), count, "questions loaded");
                }
                Ok(status)
            }
            Err(err) => {
                tracing::warn!(
                    quiz = quiz.title(),
                    url = quiz.questions_url(),
                    error = %err,
                    "error loading questions"
                );
                Ok(LoadStatus::Failed)
            }
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` when no question is shown.
    pub fn record_answer(&mut self, choice: AnswerChoice) -> Result<(), SessionError> {
        self.dispatch(SessionEvent::AnswerRecorded(choice))
    }

    /// Move to the next question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AnswerRequired` when the current question has no answer.
    pub fn go_next(&mut self) -> Result<(), SessionError> {
        self.dispatch(SessionEvent::NextRequested).inspect_err(|err| {
            if err.is_answer_required() {
                tracing::warn!(index = self.state.current_index(), "next requested without an answer");
            }
        })
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` when no question is shown.
    pub fn go_previous(&mut self) -> Result<(), SessionError> {
        self.dispatch(SessionEvent::PreviousRequested)
    }

    /// Score the attempt and show the result.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotOnLastQuestion` before the final question.
    pub fn submit(&mut self) -> Result<ScoreReport, SessionError> {
        self.dispatch(SessionEvent::Submitted)?;
        let report = self
            .state
            .result()
            .copied()
            .ok_or(SessionError::InvalidTransition {
                screen: self.state.screen(),
                action: "submit",
            })?;
        tracing::info!(
            correct = report.correct,
            total = report.total,
            percentage = report.percentage,
            "quiz submitted"
        );
        Ok(report)
    }

    /// Return to the subject list, keeping the loaded subjects.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside the result screen.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.dispatch(SessionEvent::Reset)
    }

    fn complete(&mut self, event: SessionEvent) -> Result<LoadStatus, SessionError> {
        match self.dispatch(event) {
            Ok(()) => Ok(LoadStatus::Loaded),
            Err(SessionError::StaleResponse(kind)) => {
                tracing::debug!(kind, "dropping stale response");
                Ok(LoadStatus::Stale)
            }
            Err(err) => Err(err),
        }
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("subjects_url", &self.subjects_url)
            .field("screen", &self.state.screen())
            .field("current_index", &self.state.current_index())
            .finish_non_exhaustive()
    }
}
