use std::collections::BTreeMap;

use crate::model::question::AnswerChoice;

/// Sparse map from 0-based question index to the user's selection.
///
/// Unanswered indices are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerMap {
    entries: BTreeMap<usize, AnswerChoice>,
}

impl AnswerMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the selection for `index`.
    pub fn record(&mut self, index: usize, choice: AnswerChoice) {
        self.entries.insert(index, choice);
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<AnswerChoice> {
        self.entries.get(&index).copied()
    }

    #[must_use]
    pub fn is_answered(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Number of answered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<(usize, AnswerChoice)> for AnswerMap {
    fn from_iter<T: IntoIterator<Item = (usize, AnswerChoice)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
