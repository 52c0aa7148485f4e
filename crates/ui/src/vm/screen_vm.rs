use quiz_core::model::AnswerChoice;
use quiz_core::{Screen, SessionState};

use super::result_vm::ResultVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItemVm {
    /// 1-based number the user types to pick this entry.
    pub number: usize,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectsVm {
    pub items: Vec<ListItemVm>,
    /// Subject picked whose quiz list has not arrived.
    pub pending: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizzesVm {
    pub subject: String,
    pub items: Vec<ListItemVm>,
    /// Quiz picked whose questions have not arrived.
    pub pending: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub quiz_title: String,
    pub number: usize,
    pub total: usize,
    /// `None` when the quiz has no questions.
    pub text: Option<String>,
    pub selected: Option<AnswerChoice>,
    pub can_go_previous: bool,
    pub is_last: bool,
}

/// Everything needed to draw the current screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Start,
    Subjects(SubjectsVm),
    Quizzes(QuizzesVm),
    Question(QuestionVm),
    Result(ResultVm),
}

fn list_items<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<ListItemVm> {
    labels
        .enumerate()
        .map(|(index, label)| ListItemVm {
            number: index + 1,
            label: label.to_string(),
        })
        .collect()
}

impl From<&SessionState> for ScreenVm {
    fn from(state: &SessionState) -> Self {
        match state.screen() {
            Screen::Idle => ScreenVm::Start,
            Screen::SubjectList => ScreenVm::Subjects(SubjectsVm {
                items: list_items(state.subjects().iter().map(|subject| subject.name())),
                pending: state.selected_subject().map(|subject| subject.name().to_string()),
            }),
            Screen::QuizList => ScreenVm::Quizzes(QuizzesVm {
                subject: state
                    .selected_subject()
                    .map(|subject| subject.name().to_string())
                    .unwrap_or_default(),
                items: list_items(state.quizzes().iter().map(|quiz| quiz.title())),
                pending: state.selected_quiz().map(|quiz| quiz.title().to_string()),
            }),
            Screen::Question => ScreenVm::Question(QuestionVm {
                quiz_title: state
                    .selected_quiz()
                    .map(|quiz| quiz.title().to_string())
                    .unwrap_or_default(),
                number: state.current_index() + 1,
                total: state.questions().len(),
                text: state.current_question().map(|q| q.text().to_string()),
                selected: state.current_answer(),
                can_go_previous: state.can_go_previous(),
                is_last: state.is_on_last_question(),
            }),
            Screen::Result => match state.result() {
                Some(report) => ScreenVm::Result(ResultVm::new(report, &state.review())),
                None => ScreenVm::Start,
            },
        }
    }
}
