use std::sync::Arc;

use quiz_core::model::{AnswerChoice, QuizId, SubjectId};
use quiz_core::{Screen, SessionError};
use serde_json::json;
use services::{LoadStatus, QuizConfig, SessionController, StaticFetcher};

const SUBJECTS_URL: &str = "https://data.test/subjects.json";
const SCIENCE_URL: &str = "https://data.test/science/quizzes.json";
const HISTORY_URL: &str = "https://data.test/history/quizzes.json";
const BASICS_URL: &str = "https://data.test/science/basics.json";
const EMPTY_URL: &str = "https://data.test/science/empty.json";

fn fetcher() -> StaticFetcher {
    StaticFetcher::new()
        .with_document(
            SUBJECTS_URL,
            json!([
                { "name": "Science", "quizzes_url": SCIENCE_URL },
                { "name": "History", "quizzes_url": HISTORY_URL }
            ]),
        )
        .with_document(
            SCIENCE_URL,
            json!([
                { "title": "Basics", "questions_url": BASICS_URL },
                { "title": "Empty", "questions_url": EMPTY_URL }
            ]),
        )
        .with_document(
            BASICS_URL,
            json!({
                "questions": [
                    { "text": "Sky is blue", "answer": "True" },
                    { "text": "Fish fly", "answer": "False" }
                ]
            }),
        )
        .with_document(EMPTY_URL, json!({ "questions": [] }))
}

fn controller(fetcher: &StaticFetcher) -> SessionController {
    let config = QuizConfig::default().with_subjects_url(SUBJECTS_URL);
    SessionController::new(Arc::new(fetcher.clone()), &config)
}

async fn on_basics_quiz(fetcher: &StaticFetcher) -> SessionController {
    let mut controller = controller(fetcher);
    assert_eq!(controller.load_subjects().await.unwrap(), LoadStatus::Loaded);
    assert_eq!(
        controller.select_subject(SubjectId::new(0)).await.unwrap(),
        LoadStatus::Loaded
    );
    assert_eq!(
        controller.select_quiz(QuizId::new(0)).await.unwrap(),
        LoadStatus::Loaded
    );
    controller
}

#[tokio::test]
async fn one_right_one_wrong_scores_fifty_percent() {
    let fetcher = fetcher();
    let mut controller = on_basics_quiz(&fetcher).await;
    assert_eq!(controller.state().screen(), Screen::Question);
    assert_eq!(controller.state().selected_quiz().unwrap().title(), "Basics");

    controller.record_answer(AnswerChoice::True).unwrap();
    controller.go_next().unwrap();
    controller.record_answer(AnswerChoice::True).unwrap();
    let report = controller.submit().unwrap();

    assert_eq!(report.correct, 1);
    assert_eq!(report.total, 2);
    assert!((report.percentage - 50.0).abs() < f64::EPSILON);
    assert_eq!(controller.state().screen(), Screen::Result);
    assert_eq!(
        fetcher.requests(),
        vec![SUBJECTS_URL, SCIENCE_URL, BASICS_URL]
    );
}

#[tokio::test]
async fn next_is_guarded_until_answered() {
    let fetcher = fetcher();
    let mut controller = on_basics_quiz(&fetcher).await;

    let err = controller.go_next().unwrap_err();
    assert_eq!(err, SessionError::AnswerRequired { index: 0 });
    assert_eq!(controller.state().current_index(), 0);

    controller.record_answer(AnswerChoice::False).unwrap();
    controller.go_next().unwrap();
    assert_eq!(controller.state().current_index(), 1);
}

#[tokio::test]
async fn failed_subject_fetch_leaves_state_untouched() {
    let fetcher = StaticFetcher::new();
    let mut controller = controller(&fetcher);

    let status = controller.load_subjects().await.unwrap();

    assert_eq!(status, LoadStatus::Failed);
    assert_eq!(controller.state().screen(), Screen::Idle);
    assert!(controller.state().subjects().is_empty());
}

#[tokio::test]
async fn failed_quiz_fetch_keeps_subject_selected_without_quizzes() {
    let fetcher = fetcher();
    let mut controller = controller(&fetcher);
    controller.load_subjects().await.unwrap();

    let status = controller.select_subject(SubjectId::new(1)).await.unwrap();

    assert_eq!(status, LoadStatus::Failed);
    assert_eq!(controller.state().screen(), Screen::SubjectList);
    assert_eq!(
        controller.state().selected_subject().unwrap().name(),
        "History"
    );
    assert!(controller.state().quizzes().is_empty());

    // The user can still pick another subject.
    let status = controller.select_subject(SubjectId::new(0)).await.unwrap();
    assert_eq!(status, LoadStatus::Loaded);
    assert_eq!(controller.state().screen(), Screen::QuizList);
}

#[tokio::test]
async fn failed_question_fetch_stays_on_quiz_list() {
    let fetcher = fetcher();
    fetcher.remove(BASICS_URL);
    let mut controller = controller(&fetcher);
    controller.load_subjects().await.unwrap();
    controller.select_subject(SubjectId::new(0)).await.unwrap();

    let status = controller.select_quiz(QuizId::new(0)).await.unwrap();

    assert_eq!(status, LoadStatus::Failed);
    assert_eq!(controller.state().screen(), Screen::QuizList);
    assert!(controller.state().questions().is_empty());
}

#[tokio::test]
async fn empty_quiz_can_be_submitted() {
    let fetcher = fetcher();
    let mut controller = controller(&fetcher);
    controller.load_subjects().await.unwrap();
    controller.select_subject(SubjectId::new(0)).await.unwrap();
    controller.select_quiz(QuizId::new(1)).await.unwrap();

    let report = controller.submit().unwrap();

    assert_eq!(report.total, 0);
    assert!(report.percentage.abs() < f64::EPSILON);
}

#[tokio::test]
async fn reset_keeps_subjects_and_refetch_overwrites_quizzes() {
    let fetcher = fetcher();
    let mut controller = on_basics_quiz(&fetcher).await;
    controller.record_answer(AnswerChoice::True).unwrap();
    controller.go_next().unwrap();
    controller.submit().unwrap();
    controller.reset().unwrap();

    assert_eq!(controller.state().screen(), Screen::SubjectList);
    assert_eq!(controller.state().subjects().len(), 2);
    assert!(controller.state().selected_subject().is_none());

    fetcher.insert(
        SCIENCE_URL,
        json!([{ "title": "Only", "questions_url": BASICS_URL }]),
    );
    controller.select_subject(SubjectId::new(0)).await.unwrap();

    let titles: Vec<_> = controller
        .state()
        .quizzes()
        .iter()
        .map(|quiz| quiz.title().to_string())
        .collect();
    assert_eq!(titles, vec!["Only"]);
    // Subjects were not fetched again.
    assert_eq!(
        fetcher
            .requests()
            .iter()
            .filter(|url| url.as_str() == SUBJECTS_URL)
            .count(),
        1
    );
}

#[tokio::test]
async fn reloading_a_quiz_starts_a_fresh_attempt() {
    let fetcher = fetcher();
    let mut controller = on_basics_quiz(&fetcher).await;
    controller.record_answer(AnswerChoice::True).unwrap();
    controller.go_next().unwrap();
    controller.record_answer(AnswerChoice::False).unwrap();
    controller.submit().unwrap();
    assert_eq!(controller.state().score(), 2);

    controller.reset().unwrap();
    controller.select_subject(SubjectId::new(0)).await.unwrap();
    controller.select_quiz(QuizId::new(0)).await.unwrap();

    let state = controller.state();
    assert_eq!(state.current_index(), 0);
    assert!(state.answers().is_empty());
    assert!(!state.show_result());
    assert_eq!(state.score(), 0);
}

#[tokio::test]
async fn loading_subjects_mid_quiz_is_rejected() {
    let fetcher = fetcher();
    let mut controller = on_basics_quiz(&fetcher).await;

    let err = controller.load_subjects().await.unwrap_err();

    assert!(matches!(err, SessionError::InvalidTransition { .. }));
    assert_eq!(controller.state().screen(), Screen::Question);
}
