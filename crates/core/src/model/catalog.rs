use crate::model::ids::{QuizId, SubjectId};

/// Top-level category that links to its own quiz list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    id: SubjectId,
    name: String,
    quizzes_url: String,
}

impl Subject {
    #[must_use]
    pub fn new(id: SubjectId, name: impl Into<String>, quizzes_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            quizzes_url: quizzes_url.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SubjectId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the quiz list for this subject, exactly as fetched.
    #[must_use]
    pub fn quizzes_url(&self) -> &str {
        &self.quizzes_url
    }
}

/// Named set of questions under a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    id: QuizId,
    title: String,
    questions_url: String,
}

impl Quiz {
    #[must_use]
    pub fn new(id: QuizId, title: impl Into<String>, questions_url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            questions_url: questions_url.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> QuizId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions_url(&self) -> &str {
        &self.questions_url
    }
}
