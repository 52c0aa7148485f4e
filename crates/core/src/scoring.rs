//! Scoring and per-question review for a submitted quiz.
//!
//! Everything here is a pure function of the question list and the answer map.
//! The result is always out of the full question count: an unanswered question
//! counts as wrong, and so does a question whose fetched answer is neither
//! `"True"` nor `"False"`.

use crate::model::{AnswerChoice, AnswerMap, Question};

/// Final score for a quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreReport {
    pub correct: usize,
    pub total: usize,
    /// `correct / total * 100`, rounded to two decimals. `0.0` when `total == 0`.
    pub percentage: f64,
}

impl ScoreReport {
    #[must_use]
    pub fn new(correct: usize, total: usize) -> Self {
        Self {
            correct,
            total,
            percentage: percentage(correct, total),
        }
    }
}

/// One row of the detailed review shown after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    /// 1-based question number.
    pub number: usize,
    pub text: String,
    /// The fetched answer, verbatim.
    pub correct_answer: String,
    pub given: Option<AnswerChoice>,
    pub is_correct: bool,
}

/// Number of questions whose recorded answer equals the fetched answer.
#[must_use]
pub fn correct_count(questions: &[Question], answers: &AnswerMap) -> usize {
    questions
        .iter()
        .enumerate()
        .filter(|(index, question)| is_correct(question, answers.get(*index)))
        .count()
}

/// Compute the score report for a submission.
#[must_use]
pub fn score(questions: &[Question], answers: &AnswerMap) -> ScoreReport {
    ScoreReport::new(correct_count(questions, answers), questions.len())
}

/// Build the per-question review, in question order.
#[must_use]
pub fn review(questions: &[Question], answers: &AnswerMap) -> Vec<ReviewItem> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let given = answers.get(index);
            ReviewItem {
                number: index + 1,
                text: question.text().to_string(),
                correct_answer: question.answer().to_string(),
                given,
                is_correct: is_correct(question, given),
            }
        })
        .collect()
}

fn is_correct(question: &Question, given: Option<AnswerChoice>) -> bool {
    given.is_some_and(|choice| question.is_answered_by(choice))
}

#[allow(clippy::cast_precision_loss)]
fn percentage(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = correct as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}
