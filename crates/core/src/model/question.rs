use std::fmt;

//
// ─── ANSWER CHOICE ─────────────────────────────────────────────────────────────
//

/// One of the two options a user can pick for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerChoice {
    True,
    False,
}

impl AnswerChoice {
    /// Canonical string form, compared verbatim against the fetched answer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AnswerChoice::True => "True",
            AnswerChoice::False => "False",
        }
    }
}

impl fmt::Display for AnswerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single true/false prompt.
///
/// `answer` is kept as the raw fetched string. Nothing checks that it is one of
/// the canonical spellings, so a malformed value simply never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    answer: String,
}

impl Question {
    #[must_use]
    pub fn new(text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            answer: answer.into(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Strict, case-sensitive comparison of a choice against the fetched answer.
    #[must_use]
    pub fn is_answered_by(&self, choice: AnswerChoice) -> bool {
        choice.as_str() == self.answer
    }
}
