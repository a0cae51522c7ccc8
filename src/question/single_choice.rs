//! Single-choice questions such as "set up .env now? y/n".

use super::{Collection, Prompt};
use crate::error::{AuttajaError, Result};
use crate::expr::Resolver;
use crate::state::{State, Value};

/// One selectable answer of a `SingleChoice`.
#[derive(Debug, Clone)]
pub struct ChoiceOption {
    text: String,
    value: Value,
    if_selected: Collection,
}

impl ChoiceOption {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: Value::Str(text.clone()),
            text,
            if_selected: Collection::new(),
        }
    }

    /// Value stored when this option is selected.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Questions asked only when this option is selected.
    pub fn with_follow_ups(mut self, questions: Collection) -> Self {
        self.if_selected = questions;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn follow_ups(&self) -> &Collection {
        &self.if_selected
    }
}

/// A question answered by typing one of a fixed set of short codes.
#[derive(Debug, Clone)]
pub struct SingleChoice {
    text: String,
    options: Vec<(String, ChoiceOption)>,
    default: Option<String>,
    bucket: Option<String>,
    key_name: Option<String>,
    ask: bool,
    save: bool,
}

impl SingleChoice {
    /// Build a choice from `(short code, option)` pairs, shown in the given order.
    pub fn new<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = (S, ChoiceOption)>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            options: options
                .into_iter()
                .map(|(code, option)| (code.into(), option))
                .collect(),
            default: None,
            bucket: None,
            key_name: None,
            ask: true,
            save: true,
        }
    }

    /// Select `code` when no input is asked for.
    ///
    /// Fails if `code` is not one of the declared options.
    pub fn with_default(mut self, code: &str) -> Result<Self> {
        if self.option(code).is_none() {
            return Err(AuttajaError::ConfigError(format!(
                "\"{}\" is an invalid default option for \"{}\". Possible options are: {}",
                code,
                self.text,
                self.codes()
                    .map(|c| format!("\"{}\"", c))
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }
        self.default = Some(code.to_string());
        Ok(self)
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    pub fn with_key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = Some(key_name.into());
        self
    }

    pub fn with_ask(mut self, ask: bool) -> Self {
        self.ask = ask;
        self
    }

    #[cfg(test)]
    pub fn with_save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }

    pub fn option(&self, code: &str) -> Option<&ChoiceOption> {
        self.options
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, option)| option)
    }

    fn codes(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|(code, _)| code.as_str())
    }

    pub(super) fn with_key_prefix(&self, prefix: &str) -> Self {
        Self {
            text: self.text.clone(),
            options: self
                .options
                .iter()
                .map(|(code, option)| {
                    let mut option = option.clone();
                    option.if_selected = option.if_selected.with_key_prefix(prefix);
                    (code.clone(), option)
                })
                .collect(),
            default: self.default.clone(),
            bucket: self.bucket.clone(),
            key_name: self.key_name.as_ref().map(|k| format!("{}{}", prefix, k)),
            ask: self.ask,
            save: self.save,
        }
    }

    fn save_value(&self, state: &mut State, code: &str) -> Result<()> {
        if !self.save {
            return Ok(());
        }
        let Some(key) = &self.key_name else {
            return Ok(());
        };
        let option = self.option(code).ok_or_else(|| {
            AuttajaError::ConfigError(format!(
                "Option \"{}\" is not part of \"{}\"",
                code, self.text
            ))
        })?;

        state.set(self.bucket.as_deref(), key.clone(), option.value.clone());
        Ok(())
    }
}

impl Prompt for SingleChoice {
    fn render(&self) -> String {
        let mut rendered = self.text.clone();
        for (code, option) in &self.options {
            rendered.push('\n');
            rendered.push_str(&format!("{}: {}", code, option.text));
        }
        rendered
    }

    fn error_for_input(&self, input: &str) -> Option<String> {
        if self.option(input).is_none() {
            return Some(format!(
                "Option \"{}\" not recognised. Please try again",
                input
            ));
        }
        None
    }

    fn has_default(&self) -> bool {
        self.default.is_some()
    }

    fn save_default(&self, state: &mut State, _resolver: &Resolver) -> Result<Option<String>> {
        let Some(code) = &self.default else {
            return Ok(None);
        };
        self.save_value(state, code)?;
        Ok(Some(code.clone()))
    }

    fn save_input(&self, state: &mut State, _resolver: &Resolver, input: &str) -> Result<()> {
        self.save_value(state, input)
    }

    fn follow_ups(&self, answer: &str) -> Option<&Collection> {
        self.option(answer)
            .map(|option| &option.if_selected)
            .filter(|questions| !questions.is_empty())
    }

    fn should_ask_for_input(&self) -> bool {
        self.ask
    }

    fn should_save(&self) -> bool {
        self.save
    }

    fn key_name(&self) -> Option<&str> {
        self.key_name.as_deref()
    }
}
