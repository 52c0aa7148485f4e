use quiz_core::SessionError;
use services::SessionController;

use crate::input::UserAction;
use crate::views::ANSWER_REQUIRED_ALERT;

/// What the prompt loop should do after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Re-render the current screen.
    Continue,
    /// Show a warning and wait for the user to acknowledge it.
    NeedsAcknowledgement(String),
    /// Show a short message and re-render.
    Rejected(String),
    Quit,
}

/// Forward one user action to the controller.
///
/// Fetch failures are already logged by the controller, so they re-render the
/// unchanged screen like any other completed load.
pub async fn perform(controller: &mut SessionController, action: UserAction) -> ActionOutcome {
    let result = match action {
        UserAction::Quit => return ActionOutcome::Quit,
        UserAction::LoadSubjects => controller.load_subjects().await.map(drop),
        UserAction::SelectSubject(id) => controller.select_subject(id).await.map(drop),
        UserAction::SelectQuiz(id) => controller.select_quiz(id).await.map(drop),
        UserAction::Answer(choice) => controller.record_answer(choice),
        UserAction::Next => controller.go_next(),
        UserAction::Previous => controller.go_previous(),
        UserAction::Submit => controller.submit().map(drop),
        UserAction::Home => controller.reset(),
    };

    match result {
        Ok(()) => ActionOutcome::Continue,
        Err(SessionError::AnswerRequired { .. }) => {
            ActionOutcome::NeedsAcknowledgement(ANSWER_REQUIRED_ALERT.to_string())
        }
        Err(err) => ActionOutcome::Rejected(err.to_string()),
    }
}
