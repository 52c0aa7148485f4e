use quiz_core::{ReviewItem, ScoreReport};

/// Shown in the review for questions the user skipped.
pub const NOT_ANSWERED: &str = "Not answered";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub number: usize,
    pub text: String,
    pub correct_answer: String,
    pub your_answer: String,
    pub is_correct: bool,
}

impl From<&ReviewItem> for ReviewItemVm {
    fn from(item: &ReviewItem) -> Self {
        Self {
            number: item.number,
            text: item.text.clone(),
            correct_answer: item.correct_answer.clone(),
            your_answer: item
                .given
                .map_or_else(|| NOT_ANSWERED.to_string(), |choice| choice.to_string()),
            is_correct: item.is_correct,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub correct: usize,
    pub total: usize,
    pub percentage: String,
    pub review: Vec<ReviewItemVm>,
}

impl ResultVm {
    #[must_use]
    pub fn new(report: &ScoreReport, review: &[ReviewItem]) -> Self {
        Self {
            correct: report.correct,
            total: report.total,
            percentage: format_percentage(report.percentage),
            review: review.iter().map(ReviewItemVm::from).collect(),
        }
    }
}

/// Two fixed decimals followed by a percent sign.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::AnswerChoice;

    #[test]
    fn percentage_always_has_two_decimals() {
        assert_eq!(format_percentage(50.0), "50.00%");
        assert_eq!(format_percentage(0.0), "0.00%");
        assert_eq!(format_percentage(33.33), "33.33%");
    }

    #[test]
    fn unanswered_review_item_says_so() {
        let item = ReviewItem {
            number: 1,
            text: "Sky is blue".into(),
            correct_answer: "True".into(),
            given: None,
            is_correct: false,
        };
        assert_eq!(ReviewItemVm::from(&item).your_answer, NOT_ANSWERED);

        let answered = ReviewItem {
            given: Some(AnswerChoice::False),
            ..item
        };
        assert_eq!(ReviewItemVm::from(&answered).your_answer, "False");
    }
}
