//! Default-value expressions.
//!
//! A default expression may contain one function call with literal text
//! around it:
//!
//! - `env(global.DB_NAME)_test` - value of a known template variable plus a suffix
//! - `shell(whoami)` - captured standard output of a shell command
//! - `string(localhost)` - the literal argument
//! - `calc(6 * 7)` - a small arithmetic/concatenation evaluator (`php(...)` is an alias)
//!
//! The resolved value is `before + f(argument) + after`, trimmed. An
//! expression with no recognised call is run as a shell command as a whole.

mod calc;
mod shell;


use crate::config::Config;
use crate::error::{AuttajaError, Result};
use crate::state::State;
use tracing::debug;

pub use calc::evaluate as evaluate_calc;
pub use shell::run_shell;

/// Functions recognised inside a default expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Env,
    Shell,
    String,
    Calc,
}

impl Function {
    /// Source names, in the order they are tried at each position.
    const NAMES: &'static [(&'static str, Function)] = &[
        ("env", Function::Env),
        ("php", Function::Calc),
        ("calc", Function::Calc),
        ("shell", Function::Shell),
        ("string", Function::String),
    ];
}

/// A function call found in an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call<'a> {
    pub before: &'a str,
    pub function: Function,
    pub argument: &'a str,
    pub after: &'a str,
}

/// Find the first function call in `expression`.
///
/// The argument runs to the matching closing parenthesis; if the
/// parentheses never balance, the first `)` after the opening one ends it.
pub fn parse_call(expression: &str) -> Option<Call<'_>> {
    for (start, _) in expression.char_indices() {
        let rest = &expression[start..];
        for &(name, function) in Function::NAMES {
            if !rest.starts_with(name) || !rest[name.len()..].starts_with('(') {
                continue;
            }

            let open = start + name.len();
            let close = matching_paren(expression, open)?;
            return Some(Call {
                before: &expression[..start],
                function,
                argument: &expression[open + 1..close],
                after: &expression[close + 1..],
            });
        }
    }
    None
}

fn matching_paren(expression: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, ch) in expression[open..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    expression[open + 1..].find(')').map(|i| open + 1 + i)
}

/// Evaluates default expressions against the current state.
#[derive(Debug, Clone)]
pub struct Resolver {
    shell: Vec<String>,
    allow_calc: bool,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            shell: vec!["sh".to_string(), "-c".to_string()],
            allow_calc: true,
        }
    }
}

impl Resolver {
    pub fn new(shell: Vec<String>, allow_calc: bool) -> Self {
        Self { shell, allow_calc }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.shell_command()?, config.allow_calc))
    }

    /// Resolve `expression` to its final string value.
    pub fn resolve(&self, expression: &str, state: &State) -> Result<String> {
        let Some(call) = parse_call(expression) else {
            return Ok(self.apply(Function::Shell, expression, state)?.trim().to_string());
        };

        let value = self.apply(call.function, call.argument, state)?;
        Ok(format!("{}{}{}", call.before, value, call.after)
            .trim()
            .to_string())
    }

    fn apply(&self, function: Function, argument: &str, state: &State) -> Result<String> {
        match function {
            Function::String => Ok(argument.to_string()),
            Function::Env => state
                .env_var(argument)
                .map(ToString::to_string)
                .ok_or_else(|| {
                    AuttajaError::ConfigError(format!(
                        "No environment variable found for \"{}\" - are you missing or misspelling a prefix? Allowed prefixes are: {}",
                        argument,
                        state.scopes().join(", ")
                    ))
                }),
            Function::Shell => {
                debug!(command = argument, "resolving default via shell");
                run_shell(&self.shell, argument)
            }
            Function::Calc => {
                if !self.allow_calc {
                    return Err(AuttajaError::ConfigError(format!(
                        "calc expressions are disabled (allow_calc: false); cannot evaluate \"{}\"",
                        argument
                    )));
                }
                evaluate_calc(argument)
            }
        }
    }
}
