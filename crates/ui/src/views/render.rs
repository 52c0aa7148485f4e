use std::fmt::Write;

use quiz_core::Screen;
use quiz_core::model::AnswerChoice;

use crate::vm::{QuestionVm, QuizzesVm, ResultVm, ScreenVm, SubjectsVm};

pub const ANSWER_REQUIRED_ALERT: &str =
    "Please select an answer before moving to the next question! (press Enter)";

#[must_use]
pub fn welcome_banner() -> &'static str {
    "Welcome to the Quiz!\nTest your knowledge by starting the quiz.\n"
}

/// Commands accepted on `screen`.
#[must_use]
pub fn help_line(screen: Screen) -> &'static str {
    match screen {
        Screen::Idle => "[l] load subjects  [q] quit",
        Screen::SubjectList => "[l] reload subjects  [<number>] pick a subject  [q] quit",
        Screen::QuizList => "[<number>] pick a quiz  [q] quit",
        Screen::Question => {
            "[t] True  [f] False  [p] previous  [n] next  [s] submit (last question)  [q] quit"
        }
        Screen::Result => "[h] back to home  [q] quit",
    }
}

#[must_use]
pub fn render_screen(vm: &ScreenVm) -> String {
    let mut out = String::new();
    match vm {
        ScreenVm::Start => {
            out.push_str("Load the subject list to begin.\n");
        }
        ScreenVm::Subjects(subjects) => render_subjects(&mut out, subjects),
        ScreenVm::Quizzes(quizzes) => render_quizzes(&mut out, quizzes),
        ScreenVm::Question(question) => render_question(&mut out, question),
        ScreenVm::Result(result) => render_result(&mut out, result),
    }
    out
}

fn render_subjects(out: &mut String, vm: &SubjectsVm) {
    out.push_str("Subjects\n");
    if vm.items.is_empty() {
        out.push_str("  (no subjects)\n");
    }
    for item in &vm.items {
        let _ = writeln!(out, "  {}. {}", item.number, item.label);
    }
    if let Some(subject) = &vm.pending {
        let _ = writeln!(out, "No quizzes available for {subject}.");
    }
}

fn render_quizzes(out: &mut String, vm: &QuizzesVm) {
    let _ = writeln!(out, "Quizzes in {}", vm.subject);
    if vm.items.is_empty() {
        out.push_str("  (no quizzes)\n");
    }
    for item in &vm.items {
        let _ = writeln!(out, "  {}. {}", item.number, item.label);
    }
    if let Some(quiz) = &vm.pending {
        let _ = writeln!(out, "No questions available for {quiz}.");
    }
}

fn render_question(out: &mut String, vm: &QuestionVm) {
    let _ = writeln!(out, "{}", vm.quiz_title);
    let Some(text) = &vm.text else {
        out.push_str("This quiz has no questions. Submit to finish.\n");
        return;
    };
    let _ = writeln!(out, "{}. {}", vm.number, text);
    for choice in [AnswerChoice::True, AnswerChoice::False] {
        let mark = if vm.selected == Some(choice) { "(x)" } else { "( )" };
        let _ = writeln!(out, "  {mark} {choice}");
    }

    let mut controls = Vec::new();
    if vm.can_go_previous {
        controls.push("[p] previous");
    }
    controls.push(if vm.is_last { "[s] submit" } else { "[n] next" });
    let _ = writeln!(out, "{}", controls.join("  "));
    let _ = writeln!(out, "Question {} of {}", vm.number, vm.total);
}

fn render_result(out: &mut String, vm: &ResultVm) {
    out.push_str("Quiz Completed!\n");
    let _ = writeln!(out, "You got {} out of {} correct.", vm.correct, vm.total);
    let _ = writeln!(out, "Score: {}", vm.percentage);
    out.push_str("\nDetailed Review:\n");
    for item in &vm.review {
        let verdict = if item.is_correct { "correct" } else { "wrong" };
        let _ = writeln!(out, "Q{}: {} [{verdict}]", item.number, item.text);
        let _ = writeln!(out, "  Correct Answer: {}", item.correct_answer);
        let _ = writeln!(out, "  Your Answer: {}", item.your_answer);
    }
}
