use quiz_core::Screen;
use quiz_core::model::{AnswerChoice, QuizId, SubjectId};

/// A user action typed at the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    LoadSubjects,
    SelectSubject(SubjectId),
    SelectQuiz(QuizId),
    Answer(AnswerChoice),
    Next,
    Previous,
    Submit,
    Home,
    Quit,
}

/// Parse one input line in the context of the current screen.
///
/// List entries are picked by their 1-based number. Returns `None` for input
/// that means nothing on this screen.
#[must_use]
pub fn parse_action(input: &str, screen: Screen) -> Option<UserAction> {
    let command = input.trim().to_ascii_lowercase();
    if matches!(command.as_str(), "q" | "quit") {
        return Some(UserAction::Quit);
    }

    match screen {
        Screen::Idle => matches!(command.as_str(), "l" | "load").then_some(UserAction::LoadSubjects),
        Screen::SubjectList => {
            if matches!(command.as_str(), "l" | "load") {
                return Some(UserAction::LoadSubjects);
            }
            position(&command).map(|index| UserAction::SelectSubject(SubjectId::new(index)))
        }
        Screen::QuizList => position(&command).map(|index| UserAction::SelectQuiz(QuizId::new(index))),
        Screen::Question => match command.as_str() {
            "t" | "true" => Some(UserAction::Answer(AnswerChoice::True)),
            "f" | "false" => Some(UserAction::Answer(AnswerChoice::False)),
            "n" | "next" => Some(UserAction::Next),
            "p" | "prev" | "previous" => Some(UserAction::Previous),
            "s" | "submit" => Some(UserAction::Submit),
            _ => None,
        },
        Screen::Result => matches!(command.as_str(), "h" | "home").then_some(UserAction::Home),
    }
}

fn position(command: &str) -> Option<usize> {
    command.parse::<usize>().ok()?.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_one_based() {
        assert_eq!(
            parse_action("1", Screen::SubjectList),
            Some(UserAction::SelectSubject(SubjectId::new(0)))
        );
        assert_eq!(
            parse_action(" 3 \n", Screen::QuizList),
            Some(UserAction::SelectQuiz(QuizId::new(2)))
        );
        assert_eq!(parse_action("0", Screen::QuizList), None);
        assert_eq!(parse_action("-1", Screen::SubjectList), None);
    }

    #[test]
    fn answers_only_parse_on_question_screen() {
        assert_eq!(
            parse_action("T", Screen::Question),
            Some(UserAction::Answer(AnswerChoice::True))
        );
        assert_eq!(
            parse_action("false", Screen::Question),
            Some(UserAction::Answer(AnswerChoice::False))
        );
        assert_eq!(parse_action("t", Screen::QuizList), None);
    }

    #[test]
    fn quit_is_accepted_everywhere() {
        for screen in [
            Screen::Idle,
            Screen::SubjectList,
            Screen::QuizList,
            Screen::Question,
            Screen::Result,
        ] {
            assert_eq!(parse_action("q", screen), Some(UserAction::Quit));
        }
    }

    #[test]
    fn home_only_from_result() {
        assert_eq!(parse_action("h", Screen::Result), Some(UserAction::Home));
        assert_eq!(parse_action("h", Screen::Question), None);
    }

    #[test]
    fn idle_only_loads() {
        assert_eq!(parse_action("l", Screen::Idle), Some(UserAction::LoadSubjects));
        assert_eq!(parse_action("1", Screen::Idle), None);
    }
}
