//! Turning templates into questions.

use super::paths::{destination_from_template, scope_from_template_path};
use super::syntax::{Declaration, Line, classify, declaration};
use crate::error::{AuttajaError, Result};
use crate::question::{Collection, FreeText, VarType};
use crate::state::{BUCKET_ENV_VARS, State};
use serde_json::{Map, Value as Json};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// JSON settings attached to a variable declaration.
#[derive(Debug, Default)]
struct VariableSettings {
    var_type: Option<String>,
    default: Option<String>,
    example: Option<String>,
    ask: Option<bool>,
}

/// Build the questions for every declared variable of `template` that has
/// no value yet.
///
/// Unless `force_recreate` is set, an existing destination file is
/// imported into `state` first, so its variables count as answered.
/// A missing template yields an empty collection.
pub fn read_questions(template: &Path, state: &mut State, force_recreate: bool) -> Result<Collection> {
    if !template.exists() {
        debug!(template = %template.display(), "template not found, nothing to ask");
        return Ok(Collection::new());
    }

    let scope = scope_from_template_path(template);
    state.register_scope(&scope);

    let destination = destination_from_template(template)?;
    if !force_recreate && destination.exists() {
        import_destination(&destination, &scope, state)?;
    }

    let content = read_file(template)?;
    let mut questions = Collection::new();
    let mut annotations: Vec<String> = Vec::new();
    let mut ignoring = false;

    for raw in content.lines() {
        match classify(raw) {
            Line::Blank => continue,
            Line::IgnoreStart => ignoring = true,
            Line::IgnoreEnd => ignoring = false,
            _ if ignoring => continue,
            Line::Comment(text) => annotations.push(text.to_string()),
            Line::Assignment { name, value } => {
                let pending = std::mem::take(&mut annotations);

                let settings = match declaration(value) {
                    Declaration::Hardcoded => continue,
                    Declaration::Bare => VariableSettings::default(),
                    Declaration::WithSettings(json) => parse_settings(template, name, json)?,
                };

                let scoped_key = format!("{}.{}", scope, name);
                if state.has_env_var(&scoped_key) {
                    debug!(variable = %scoped_key, "already has a value, not asking");
                    continue;
                }

                questions.push(build_question(name, settings, pending)?);
            }
            Line::Other => annotations.clear(),
        }
    }

    Ok(questions.with_key_prefix(&format!("{}.", scope)))
}

/// Import every `NAME=value` line of an existing destination file into the
/// `envVars` bucket as `<scope>.NAME`. Other lines are ignored.
pub fn import_destination(destination: &Path, scope: &str, state: &mut State) -> Result<usize> {
    let content = read_file(destination)?;
    let mut imported = 0;

    for raw in content.lines() {
        if let Line::Assignment { name, value } = classify(raw) {
            state.set_env_var(format!("{}.{}", scope, name), value);
            imported += 1;
        }
    }

    info!(
        destination = %destination.display(),
        imported,
        "imported existing values"
    );
    Ok(imported)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        AuttajaError::IoError(format!("failed to read '{}': {}", path.display(), e))
    })
}

/// Parse the settings object of variable `name`.
///
/// `type`, `default` and `example` take any JSON scalar. A number or
/// boolean default is a literal, so it is stored as `string(...)`. `ask`
/// takes a boolean or a number, where zero means false.
fn parse_settings(template: &Path, name: &str, json: &str) -> Result<VariableSettings> {
    let parsed: Json = serde_json::from_str(json).map_err(|e| {
        AuttajaError::ConfigError(format!(
            "These {} settings are not valid JSON ({}):\n{}",
            template.display(),
            e,
            json
        ))
    })?;

    let Json::Object(fields) = parsed else {
        return Err(AuttajaError::ConfigError(format!(
            "Settings of {} in {} must be a JSON object, got:\n{}",
            name,
            template.display(),
            json
        )));
    };

    let wrong_type = |key: &str, expected: &str| {
        AuttajaError::ConfigError(format!(
            "Setting \"{}\" of {} in {} must be {}",
            key,
            name,
            template.display(),
            expected
        ))
    };
    let scalar = |key: &str| -> Result<Option<Json>> {
        match field(&fields, key) {
            None => Ok(None),
            Some(value)
                if matches!(value, Json::String(_) | Json::Number(_) | Json::Bool(_)) =>
            {
                Ok(Some(value.clone()))
            }
            Some(_) => Err(wrong_type(key, "a string, number or boolean")),
        }
    };

    let default = scalar("default")?.map(|value| match value {
        Json::String(text) => text,
        literal => format!("string({})", literal),
    });

    let ask = match field(&fields, "ask") {
        None => None,
        Some(Json::Bool(flag)) => Some(*flag),
        Some(Json::Number(number)) => Some(number.as_f64().is_some_and(|n| n != 0.0)),
        Some(_) => return Err(wrong_type("ask", "a boolean")),
    };

    Ok(VariableSettings {
        var_type: scalar("type")?.map(scalar_text),
        default,
        example: scalar("example")?.map(scalar_text),
        ask,
    })
}

/// A settings field, treating `null` as absent.
fn field<'a>(fields: &'a Map<String, Json>, key: &str) -> Option<&'a Json> {
    fields.get(key).filter(|value| !value.is_null())
}

fn scalar_text(value: Json) -> String {
    match value {
        Json::String(text) => text,
        other => other.to_string(),
    }
}

fn build_question(name: &str, settings: VariableSettings, annotations: Vec<String>) -> Result<FreeText> {
    let var_type = match settings.var_type.as_deref() {
        Some(type_name) => VarType::parse(type_name, name)?,
        None => VarType::Untyped,
    };

    Ok(FreeText::new("placeholder")
        .with_name(name)
        .with_bucket(BUCKET_ENV_VARS)
        .with_key_name(name)
        .with_annotations(annotations)
        .with_type(var_type)
        .with_default(settings.default)
        .with_example(settings.example)
        .with_ask(settings.ask.unwrap_or(true))
        .with_variable_prompt())
}
