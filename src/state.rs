//! Shared run state.
//!
//! A `State` is created empty at the start of a run and threaded by
//! reference through template reading, prompting and writing. Values are
//! partitioned into named buckets; the `None` bucket holds values that
//! belong to no namespace (setup gates, routing answers).

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Bucket holding every template variable, keyed `<scope>.<NAME>`.
pub const BUCKET_ENV_VARS: &str = "envVars";

/// A stored answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// Key/value store partitioned into buckets.
#[derive(Debug, Clone, Default)]
pub struct State {
    values: BTreeMap<Option<String>, BTreeMap<String, Value>>,
    scopes: BTreeSet<String>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, overwriting any previous value in that bucket.
    pub fn set(&mut self, bucket: Option<&str>, key: impl Into<String>, value: impl Into<Value>) {
        self.values
            .entry(bucket.map(str::to_string))
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn get(&self, bucket: Option<&str>, key: &str) -> Option<&Value> {
        self.values
            .get(&bucket.map(str::to_string))
            .and_then(|values| values.get(key))
    }

    /// All values of a named bucket, or `None` if nothing was ever stored in it.
    pub fn bucket(&self, name: &str) -> Option<&BTreeMap<String, Value>> {
        self.values.get(&Some(name.to_string()))
    }

    pub fn set_env_var(&mut self, scoped_key: impl Into<String>, value: impl Into<Value>) {
        self.set(Some(BUCKET_ENV_VARS), scoped_key, value);
    }

    pub fn env_var(&self, scoped_key: &str) -> Option<&Value> {
        self.get(Some(BUCKET_ENV_VARS), scoped_key)
    }

    pub fn has_env_var(&self, scoped_key: &str) -> bool {
        self.env_var(scoped_key).is_some()
    }

    /// Names of every known template variable, in sorted order.
    pub fn env_var_names(&self) -> Vec<&str> {
        self.bucket(BUCKET_ENV_VARS)
            .map(|vars| vars.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Template variables rendered as strings, for placeholder substitution.
    pub fn env_vars_as_strings(&self) -> BTreeMap<String, String> {
        self.bucket(BUCKET_ENV_VARS)
            .map(|vars| {
                vars.iter()
                    .map(|(k, v)| (k.clone(), v.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Record that a template scope takes part in this run.
    pub fn register_scope(&mut self, scope: &str) {
        self.scopes.insert(scope.to_string());
    }

    /// Scopes in use: every registered scope plus every prefix seen in `envVars`.
    pub fn scopes(&self) -> Vec<String> {
        let mut scopes = self.scopes.clone();
        for name in self.env_var_names() {
            if let Some((prefix, _)) = name.split_once('.') {
                scopes.insert(prefix.to_string());
            }
        }
        scopes.into_iter().collect()
    }
}
