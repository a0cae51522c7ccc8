//! Ordered question collections.

use super::{Prompt, Question};

/// An ordered set of questions; insertion order is the prompting order.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    questions: Vec<Question>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, question: impl Into<Question>) {
        self.questions.push(question.into());
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    /// Concatenate `other` after the questions of `self`.
    pub fn merge(mut self, other: Collection) -> Collection {
        self.questions.extend(other.questions);
        self
    }

    /// Copy of this collection with every persisted key prefixed by `prefix`,
    /// including keys of nested follow-up questions.
    pub fn with_key_prefix(&self, prefix: &str) -> Collection {
        Collection {
            questions: self
                .questions
                .iter()
                .map(|q| q.with_key_prefix(prefix))
                .collect(),
        }
    }

    /// Whether at least one question will actually prompt the user.
    pub fn requires_user_input(&self) -> bool {
        self.questions.iter().any(|q| !q.is_silent())
    }
}

impl From<Vec<Question>> for Collection {
    fn from(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
