//! Interactive prompting.
//!
//! The runner walks a question collection depth-first. Silent questions
//! take their default straight away; the rest are rendered to the output
//! stream and re-asked until the answer validates. Validation messages go
//! to the error stream. Follow-up questions of the chosen answer are
//! processed before moving on to the next sibling.


use crate::error::{AuttajaError, Result};
use crate::expr::Resolver;
use crate::question::{Collection, Prompt};
use crate::state::State;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub struct PromptRunner<R, W, E> {
    input: R,
    output: W,
    errors: E,
    resolver: Resolver,
}

impl PromptRunner<io::StdinLock<'static>, io::Stdout, io::Stderr> {
    /// A runner bound to the process's standard streams.
    pub fn stdio(resolver: Resolver) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr(), resolver)
    }
}

impl<R: BufRead, W: Write, E: Write> PromptRunner<R, W, E> {
    pub fn new(input: R, output: W, errors: E, resolver: Resolver) -> Self {
        Self {
            input,
            output,
            errors,
            resolver,
        }
    }

    /// Ask every question of `questions`, storing answers in `state`.
    pub fn process(&mut self, questions: &Collection, state: &mut State) -> Result<()> {
        for question in questions {
            if question.is_silent() {
                let answer = question.save_default(state, &self.resolver)?;
                debug!(key = ?question.key_name(), answer = ?answer, "used default");

                if let Some(follow_ups) = answer.as_deref().and_then(|a| question.follow_ups(a)) {
                    self.process(follow_ups, state)?;
                }
                continue;
            }

            write!(self.output, "\n{}\n", question.render()).map_err(output_error)?;
            self.output.flush().map_err(output_error)?;

            let answer = loop {
                let input = self.read_answer()?;
                match question.error_for_input(&input) {
                    Some(message) => {
                        writeln!(self.errors, "{}", message).map_err(output_error)?;
                    }
                    None => break input,
                }
            };

            question.save_input(state, &self.resolver, &answer)?;

            if let Some(follow_ups) = question.follow_ups(&answer) {
                self.process(follow_ups, state)?;
            }
        }

        Ok(())
    }

    /// Consume the runner and hand back its streams.
    #[cfg(test)]
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.output, self.errors)
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| AuttajaError::InputError(format!("failed to read answer: {}", e)))?;

        if read == 0 {
            return Err(AuttajaError::InputError(
                "standard input closed before all questions were answered".to_string(),
            ));
        }

        Ok(line.trim().to_string())
    }
}

fn output_error(e: io::Error) -> AuttajaError {
    AuttajaError::IoError(format!("failed to write prompt: {}", e))
}
