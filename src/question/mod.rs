//! Questions asked while generating files.
//!
//! A `Question` is one unit of interaction: a free-text variable prompt or
//! a single choice from a list. Both share the `Prompt` capability set used
//! by the prompt runner. A choice's options own their follow-up
//! collections, so a question tree can never contain a cycle.

mod collection;
mod free_text;
mod single_choice;

#[cfg(test)]
mod tests;

use crate::error::Result;
use crate::expr::Resolver;
use crate::state::State;

pub use collection::Collection;
pub use free_text::{FreeText, VarType};
pub use single_choice::{ChoiceOption, SingleChoice};

/// Capabilities every question provides to the prompt runner.
pub trait Prompt {
    /// Text shown to the user, including annotations or option lists.
    fn render(&self) -> String;

    /// A message describing why `input` is unacceptable, or `None` if it is fine.
    fn error_for_input(&self, input: &str) -> Option<String>;

    fn has_default(&self) -> bool;

    /// Store the default value and return the answer it stands for, so the
    /// caller can route into follow-up questions.
    fn save_default(&self, state: &mut State, resolver: &Resolver) -> Result<Option<String>>;

    /// Store a validated answer.
    fn save_input(&self, state: &mut State, resolver: &Resolver, input: &str) -> Result<()>;

    /// Questions revealed by `answer`, if any.
    fn follow_ups(&self, answer: &str) -> Option<&Collection>;

    fn should_ask_for_input(&self) -> bool;

    /// Whether the answer is persisted or only used for routing.
    fn should_save(&self) -> bool;

    fn key_name(&self) -> Option<&str>;

    /// Whether this question is answered from its default without prompting.
    fn is_silent(&self) -> bool {
        !self.should_ask_for_input() && self.has_default()
    }
}

/// One question in a collection.
#[derive(Debug, Clone)]
pub enum Question {
    FreeText(FreeText),
    SingleChoice(SingleChoice),
}

impl Question {
    /// Copy of this question with its persisted key (and every nested key) prefixed.
    pub fn with_key_prefix(&self, prefix: &str) -> Question {
        match self {
            Question::FreeText(q) => Question::FreeText(q.with_key_prefix(prefix)),
            Question::SingleChoice(q) => Question::SingleChoice(q.with_key_prefix(prefix)),
        }
    }

    fn inner(&self) -> &dyn Prompt {
        match self {
            Question::FreeText(q) => q,
            Question::SingleChoice(q) => q,
        }
    }
}

impl From<FreeText> for Question {
    fn from(question: FreeText) -> Self {
        Question::FreeText(question)
    }
}

impl From<SingleChoice> for Question {
    fn from(question: SingleChoice) -> Self {
        Question::SingleChoice(question)
    }
}

impl Prompt for Question {
    fn render(&self) -> String {
        self.inner().render()
    }

    fn error_for_input(&self, input: &str) -> Option<String> {
        self.inner().error_for_input(input)
    }

    fn has_default(&self) -> bool {
        self.inner().has_default()
    }

    fn save_default(&self, state: &mut State, resolver: &Resolver) -> Result<Option<String>> {
        self.inner().save_default(state, resolver)
    }

    fn save_input(&self, state: &mut State, resolver: &Resolver, input: &str) -> Result<()> {
        self.inner().save_input(state, resolver, input)
    }

    fn follow_ups(&self, answer: &str) -> Option<&Collection> {
        self.inner().follow_ups(answer)
    }

    fn should_ask_for_input(&self) -> bool {
        self.inner().should_ask_for_input()
    }

    fn should_save(&self) -> bool {
        self.inner().should_save()
    }

    fn key_name(&self) -> Option<&str> {
        self.inner().key_name()
    }
}
