use crate::error::SessionError;
use crate::model::{AnswerChoice, Question, Quiz, QuizId, Subject, SubjectId};
use crate::scoring;

use super::event::SessionEvent;
use super::state::{Screen, SessionState};

/// Apply one event to the session.
///
/// Returns the next state. On error the caller keeps `state` as it was.
///
/// # Errors
///
/// - `SessionError::AnswerRequired` when moving forward from an unanswered question.
/// - `SessionError::NotOnLastQuestion` when submitting before the final question.
/// - `SessionError::StaleResponse` for a load completion that no longer matches the selection.
/// - `SessionError::UnknownSubject` / `SessionError::UnknownQuiz` for ids outside the loaded lists.
/// - `SessionError::InvalidTransition` for any event that does not apply to the current screen.
pub fn reduce(state: &SessionState, event: SessionEvent) -> Result<SessionState, SessionError> {
    let mut next = state.clone();
    match event {
        SessionEvent::SubjectsLoaded(subjects) => load_subjects(&mut next, subjects)?,
        SessionEvent::SubjectSelected(id) => select_subject(&mut next, id)?,
        SessionEvent::QuizzesLoaded { subject, quizzes } => {
            load_quizzes(&mut next, subject, quizzes)?;
        }
        SessionEvent::QuizSelected(id) => select_quiz(&mut next, id)?,
        SessionEvent::QuestionsLoaded { quiz, questions } => {
            load_questions(&mut next, quiz, questions)?;
        }
        SessionEvent::AnswerRecorded(choice) => record_answer(&mut next, choice)?,
        SessionEvent::NextRequested => go_next(&mut next)?,
        SessionEvent::PreviousRequested => go_previous(&mut next)?,
        SessionEvent::Submitted => submit(&mut next)?,
        SessionEvent::Reset => reset(&mut next)?,
    }
    Ok(next)
}

fn require_screen(
    state: &SessionState,
    allowed: &[Screen],
    action: &'static str,
) -> Result<(), SessionError> {
    if allowed.contains(&state.screen) {
        Ok(())
    } else {
        Err(SessionError::InvalidTransition {
            screen: state.screen,
            action,
        })
    }
}

fn load_subjects(state: &mut SessionState, subjects: Vec<Subject>) -> Result<(), SessionError> {
    if !matches!(state.screen, Screen::Idle | Screen::SubjectList) {
        return Err(SessionError::StaleResponse("subjects"));
    }
    state.subjects = subjects;
    state.selected_subject = None;
    state.quizzes.clear();
    state.selected_quiz = None;
    state.screen = Screen::SubjectList;
    Ok(())
}

fn select_subject(state: &mut SessionState, id: SubjectId) -> Result<(), SessionError> {
    require_screen(state, &[Screen::SubjectList], "select_subject")?;
    let subject = state
        .subjects
        .iter()
        .find(|subject| subject.id() == id)
        .cloned()
        .ok_or(SessionError::UnknownSubject(id))?;

    // A failed fetch must leave no quiz list behind.
    state.quizzes.clear();
    state.selected_subject = Some(subject);
    Ok(())
}

fn load_quizzes(
    state: &mut SessionState,
    subject: SubjectId,
    quizzes: Vec<Quiz>,
) -> Result<(), SessionError> {
    let is_current = state.screen == Screen::SubjectList
        && state
            .selected_subject
            .as_ref()
            .is_some_and(|selected| selected.id() == subject);
    if !is_current {
        return Err(SessionError::StaleResponse("quizzes"));
    }
    state.quizzes = quizzes;
    state.selected_quiz = None;
    state.screen = Screen::QuizList;
    Ok(())
}

fn select_quiz(state: &mut SessionState, id: QuizId) -> Result<(), SessionError> {
    require_screen(state, &[Screen::QuizList], "select_quiz")?;
    let quiz = state
        .quizzes
        .iter()
        .find(|quiz| quiz.id() == id)
        .cloned()
        .ok_or(SessionError::UnknownQuiz(id))?;
    state.selected_quiz = Some(quiz);
    Ok(())
}

fn load_questions(
    state: &mut SessionState,
    quiz: QuizId,
    questions: Vec<Question>,
) -> Result<(), SessionError> {
    let is_current = state.screen == Screen::QuizList
        && state
            .selected_quiz
            .as_ref()
            .is_some_and(|selected| selected.id() == quiz);
    if !is_current {
        return Err(SessionError::StaleResponse("questions"));
    }
    state.questions = questions;
    state.current_index = 0;
    state.answers.clear();
    state.result = None;
    state.screen = Screen::Question;
    Ok(())
}

fn record_answer(state: &mut SessionState, choice: AnswerChoice) -> Result<(), SessionError> {
    require_screen(state, &[Screen::Question], "record_answer")?;
    if state.questions.is_empty() {
        return Err(SessionError::InvalidTransition {
            screen: state.screen,
            action: "record_answer",
        });
    }
    state.answers.record(state.current_index, choice);
    Ok(())
}

fn go_next(state: &mut SessionState) -> Result<(), SessionError> {
    require_screen(state, &[Screen::Question], "next")?;
    if !state.answers.is_answered(state.current_index) {
        return Err(SessionError::AnswerRequired {
            index: state.current_index,
        });
    }
    let last = state.last_index().unwrap_or(0);
    state.current_index = (state.current_index + 1).min(last);
    Ok(())
}

fn go_previous(state: &mut SessionState) -> Result<(), SessionError> {
    require_screen(state, &[Screen::Question], "previous")?;
    state.current_index = state.current_index.saturating_sub(1);
    Ok(())
}

fn submit(state: &mut SessionState) -> Result<(), SessionError> {
    require_screen(state, &[Screen::Question], "submit")?;
    if !state.is_on_last_question() {
        return Err(SessionError::NotOnLastQuestion);
    }
    state.result = Some(scoring::score(&state.questions, &state.answers));
    state.screen = Screen::Result;
    Ok(())
}

fn reset(state: &mut SessionState) -> Result<(), SessionError> {
    require_screen(state, &[Screen::Result], "reset")?;
    state.selected_subject = None;
    state.selected_quiz = None;
    state.questions.clear();
    state.current_index = 0;
    state.answers.clear();
    state.result = None;
    state.screen = Screen::SubjectList;
    Ok(())
}
