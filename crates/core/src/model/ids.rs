use std::fmt;

/// Position of a subject inside the most recently fetched subject index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(usize);

impl SubjectId {
    /// Creates a new `SubjectId` from a 0-based position.
    #[must_use]
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    /// Returns the 0-based position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.0
    }
}

/// Position of a quiz inside the quiz list of the selected subject.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuizId(usize);

impl QuizId {
    /// Creates a new `QuizId` from a 0-based position.
    #[must_use]
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    /// Returns the 0-based position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubjectId({})", self.0)
    }
}

impl fmt::Debug for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuizId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
