//! The `env` flow: read templates, ask, write.
//!
//! Questions of the first template are wrapped in a "set up now?" gate.
//! Every later template that needs user input gets its own gate nested in
//! the first gate's "yes" branch; templates whose questions are all silent
//! are merged into that branch directly. Gate answers are stored as booleans
//! under `setup.<scope>` without a bucket, and a template is written only if
//! every gate on its path was answered "yes". When nothing needs input no
//! gate is asked and every template is written. Missing templates are
//! dropped up front.


use crate::config::ReadmeMapping;
use crate::error::Result;
use crate::prompt::PromptRunner;
use crate::question::{ChoiceOption, Collection, SingleChoice};
use crate::readme;
use crate::state::{State, Value};
use crate::template::{
    destination_from_template, import_destination, read_questions, scope_from_template_path,
    write_destinations,
};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of the keys gate answers are stored under.
pub const SETUP_KEY_PREFIX: &str = "setup.";

/// What an `env` run should do.
#[derive(Debug, Clone, Default)]
pub struct EnvRequest {
    /// Templates in processing order.
    pub templates: Vec<PathBuf>,
    /// Ask every declared variable again instead of importing existing files.
    pub force_recreate: bool,
    /// README mappings processed after the env files are written.
    pub readme: Vec<ReadmeMapping>,
}

/// Files touched by an `env` run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EnvReport {
    pub written: Vec<PathBuf>,
    /// Templates whose gate was answered "no".
    pub declined: Vec<PathBuf>,
    pub readme: Vec<PathBuf>,
}

struct Prepared {
    template: PathBuf,
    setup_key: String,
    questions: Collection,
    /// Gate keys that must all be `true` for this template to be written.
    gates: Vec<String>,
}

/// Run the complete `env` flow against `prompts`.
pub fn run_env<R: BufRead, W: Write, E: Write>(
    request: &EnvRequest,
    prompts: &mut PromptRunner<R, W, E>,
) -> Result<EnvReport> {
    let mut state = State::new();
    let mut prepared = Vec::new();
    for template in dedup(&request.templates) {
        if !template.exists() {
            info!(template = %template.display(), "template not found, skipping");
            continue;
        }
        let questions = read_questions(&template, &mut state, request.force_recreate)?;
        prepared.push(Prepared {
            setup_key: format!("{}{}", SETUP_KEY_PREFIX, scope_from_template_path(&template)),
            template,
            questions,
            gates: Vec::new(),
        });
    }

    let questions = build_setup_questions(&mut prepared)?;
    prompts.process(&questions, &mut state)?;

    let mut report = EnvReport::default();
    let mut accepted = Vec::new();
    for entry in prepared {
        let confirmed = entry
            .gates
            .iter()
            .all(|key| state.get(None, key) == Some(&Value::Bool(true)));

        if confirmed {
            accepted.push(entry.template);
        } else {
            info!(template = %entry.template.display(), "setup declined, not writing");
            report.declined.push(entry.template);
        }
    }
    report.written = write_destinations(&accepted, &state)?;

    if !request.readme.is_empty() {
        report.readme = readme::process(&request.readme, &state.env_vars_as_strings())?;
    }

    Ok(report)
}

/// Import the current destination files of `templates` and run the README
/// pass over `mappings`.
pub fn run_readme(templates: &[PathBuf], mappings: &[ReadmeMapping]) -> Result<Vec<PathBuf>> {
    let mut state = State::new();
    for template in templates {
        let scope = scope_from_template_path(template);
        state.register_scope(&scope);

        let destination = destination_from_template(template)?;
        if destination.exists() {
            import_destination(&destination, &scope, &mut state)?;
        }
    }

    readme::process(mappings, &state.env_vars_as_strings())
}

/// Assemble the gated question tree and record each template's gates.
fn build_setup_questions(prepared: &mut [Prepared]) -> Result<Collection> {
    let needs_input = prepared.iter().any(|p| p.questions.requires_user_input());
    if !needs_input {
        return Ok(prepared
            .iter()
            .fold(Collection::new(), |all, p| all.merge(p.questions.clone())));
    }

    let Some((first, rest)) = prepared.split_first_mut() else {
        return Ok(Collection::new());
    };

    let mut branch = first.questions.clone();
    for entry in rest.iter_mut() {
        entry.gates.push(first.setup_key.clone());

        if entry.questions.requires_user_input() {
            branch.push(gate(&entry.template, &entry.setup_key, entry.questions.clone())?);
            entry.gates.push(entry.setup_key.clone());
        } else {
            branch = branch.merge(entry.questions.clone());
        }
    }

    first.gates.push(first.setup_key.clone());

    let mut questions = Collection::new();
    questions.push(gate(&first.template, &first.setup_key, branch)?);
    Ok(questions)
}

fn gate(template: &Path, key: &str, follow_ups: Collection) -> Result<SingleChoice> {
    let destination = destination_from_template(template)?;
    Ok(SingleChoice::new(
        format!(
            "Would you like to set up the {} file now?",
            destination.display()
        ),
        [
            (
                "y",
                ChoiceOption::new("Yes")
                    .with_value(true)
                    .with_follow_ups(follow_ups),
            ),
            ("n", ChoiceOption::new("No").with_value(false)),
        ],
    )
    .with_key_name(key))
}

fn dedup(templates: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen = Vec::new();
    for template in templates {
        if !seen.contains(template) {
            seen.push(template.clone());
        }
    }
    seen
}
