//! Materialising destination files from templates.

use super::paths::{destination_from_template, scope_from_template_path};
use super::syntax::{Line, classify};
use crate::error::{AuttajaError, Result};
use crate::fs::atomic_write_file;
use crate::state::State;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Render the destination content for `template`.
///
/// Blank lines are kept, comments and ignore markers are dropped, and each
/// `NAME=...` line takes the value held in `state`, falling back to the
/// literal value when it is not a settings object.
pub fn render_destination(template: &Path, state: &State) -> Result<String> {
    let content = fs::read_to_string(template).map_err(|e| {
        AuttajaError::IoError(format!("failed to read '{}': {}", template.display(), e))
    })?;
    let scope = scope_from_template_path(template);

    let mut lines = Vec::new();
    for raw in content.lines() {
        match classify(raw) {
            Line::Blank => lines.push(String::new()),
            Line::Assignment { name, value } => {
                let scoped_key = format!("{}.{}", scope, name);
                if let Some(resolved) = state.env_var(&scoped_key) {
                    lines.push(format!("{}={}", name, resolved));
                } else if !value.starts_with('{') {
                    lines.push(format!("{}={}", name, value));
                } else {
                    return Err(AuttajaError::ConfigError(format!(
                        "Unable to determine value for environment variable \"{}\" in {}. \
                         Perhaps no value was provided and no default specified.\n\
                         These are the variables I have:\n{}",
                        name,
                        template.display(),
                        state.env_var_names().join("\n")
                    )));
                }
            }
            Line::Comment(_) | Line::IgnoreStart | Line::IgnoreEnd | Line::Other => {}
        }
    }

    if lines.is_empty() {
        return Ok(String::new());
    }
    Ok(lines.join("\n") + "\n")
}

/// Write the destination of `template` in one atomic replace.
///
/// Returns the destination path, or `None` if the template does not exist.
pub fn write_destination(template: &Path, state: &State) -> Result<Option<PathBuf>> {
    if !template.exists() {
        debug!(template = %template.display(), "template not found, skipping");
        return Ok(None);
    }

    let destination = destination_from_template(template)?;
    let content = render_destination(template, state)?;
    atomic_write_file(&destination, &content)?;

    info!(destination = %destination.display(), "wrote destination file");
    Ok(Some(destination))
}

/// Write the destination of every template in order, skipping missing ones.
pub fn write_destinations(templates: &[PathBuf], state: &State) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for template in templates {
        if let Some(destination) = write_destination(template, state)? {
            written.push(destination);
        }
    }
    Ok(written)
}
