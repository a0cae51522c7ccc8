//! Free-text questions, one per declared template variable.

use super::{Collection, Prompt};
use crate::error::{AuttajaError, Result};
use crate::expr::Resolver;
use crate::state::{State, Value};

/// Declared scalar type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarType {
    #[default]
    Untyped,
    Integer,
    String,
}

impl VarType {
    const NAMES: &'static [&'static str] = &["string", "integer", "int"];

    /// Parse the `type` setting of `variable`.
    pub fn parse(name: &str, variable: &str) -> Result<Self> {
        match name {
            "string" => Ok(VarType::String),
            "integer" | "int" => Ok(VarType::Integer),
            other => Err(AuttajaError::ConfigError(format!(
                "Unknown type \"{}\" (used by \"{}\"). Valid types are: {}",
                other,
                variable,
                Self::NAMES.join(", ")
            ))),
        }
    }
}

/// A question answered by typing a value.
#[derive(Debug, Clone)]
pub struct FreeText {
    text: String,
    name: Option<String>,
    var_type: VarType,
    default: Option<String>,
    example: Option<String>,
    annotations: Vec<String>,
    bucket: Option<String>,
    key_name: Option<String>,
    ask: bool,
    save: bool,
}

impl FreeText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            name: None,
            var_type: VarType::Untyped,
            default: None,
            example: None,
            annotations: Vec::new(),
            bucket: None,
            key_name: None,
            ask: true,
            save: true,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type(mut self, var_type: VarType) -> Self {
        self.var_type = var_type;
        self
    }

    /// Default-value expression, resolved only when it is needed.
    pub fn with_default(mut self, default: Option<String>) -> Self {
        self.default = default;
        self
    }

    pub fn with_example(mut self, example: Option<String>) -> Self {
        self.example = example;
        self
    }

    pub fn with_annotations(mut self, annotations: Vec<String>) -> Self {
        self.annotations = annotations;
        self
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

    /// Replace the text with the standard variable prompt built from the
    /// name, example and default.
    pub fn with_variable_prompt(self) -> Self {
        let name = self.name.clone().unwrap_or_default();
        let example = self
            .example
            .as_deref()
            .map(|e| format!(" (for example: {})", e))
            .unwrap_or_default();
        let default_hint = if self.has_default() {
            " (or leave empty to use a default)"
        } else {
            ""
        };
        self.with_text(format!(
            "Please enter a value for {}{}{}:",
            name, example, default_hint
        ))
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn var_type(&self) -> VarType {
        self.var_type
    }

    pub fn default_expression(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }

    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub(super) fn with_key_prefix(&self, prefix: &str) -> Self {
        let mut question = self.clone();
        question.key_name = self.key_name.as_ref().map(|k| format!("{}{}", prefix, k));
        question
    }

    fn save_value(&self, state: &mut State, raw: String) -> Result<()> {
        if !self.save {
            return Ok(());
        }
        let Some(key) = &self.key_name else {
            return Ok(());
        };

        let value = match self.var_type {
            VarType::Integer => Value::Int(to_integer(&raw)),
            _ => Value::Str(raw),
        };

        state.set(self.bucket.as_deref(), key.clone(), value);
        Ok(())
    }
}

/// Whole or fractional numbers are accepted; fractions are truncated.
fn coerce_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
        .map(|f| f.trunc() as i64)
}

/// Integer value stored for an integer variable. Numeric text is coerced
/// as above; otherwise the leading `[+-]digits` are used, saturating on
/// overflow, and text without any is `0`.
fn to_integer(raw: &str) -> i64 {
    if let Some(value) = coerce_integer(raw) {
        return value;
    }

    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }
    if negative { value.saturating_neg() } else { value }
}

impl Prompt for FreeText {
    fn render(&self) -> String {
        let mut rendered = String::new();
        for annotation in &self.annotations {
            rendered.push_str(annotation);
            rendered.push('\n');
        }
        rendered.push_str(&self.text);
        rendered
    }

    fn error_for_input(&self, input: &str) -> Option<String> {
        if input.is_empty() {
            return None;
        }

        match self.var_type {
            VarType::Integer if coerce_integer(input).is_none() => {
                Some("Input must be an integer. Please try again.".to_string())
            }
            _ => None,
        }
    }

    fn has_default(&self) -> bool {
        self.default.as_deref().is_some_and(|d| !d.is_empty())
    }

    fn save_default(&self, state: &mut State, resolver: &Resolver) -> Result<Option<String>> {
        let Some(expression) = self.default.as_deref().filter(|d| !d.is_empty()) else {
            return Ok(None);
        };
        let value = resolver.resolve(expression, state)?;
        self.save_value(state, value.clone())?;
        Ok(Some(value))
    }

    fn save_input(&self, state: &mut State, resolver: &Resolver, input: &str) -> Result<()> {
        match self.default.as_deref() {
            Some(expression) if input.is_empty() && !expression.is_empty() => {
                let value = resolver.resolve(expression, state)?;
                self.save_value(state, value)
            }
            _ => self.save_value(state, input.to_string()),
        }
    }

    fn follow_ups(&self, _answer: &str) -> Option<&Collection> {
        None
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
