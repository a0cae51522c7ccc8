//! README and documentation templating.
//!
//! Every `.template` file under a mapped source has its `{#name#}`
//! placeholders replaced with resolved variable values and is written to
//! the mapped destination with the suffix stripped. Directory sources are
//! mirrored recursively. Placeholders without a value are left as they are.


use crate::config::ReadmeMapping;
use crate::error::{AuttajaError, Result};
use crate::fs::atomic_write_file;
use crate::template::TEMPLATE_SUFFIX;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;
use walkdir::WalkDir;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{#([\w\-.]+)#\}").expect("invalid placeholder regex"));

/// Replace every known `{#name#}` placeholder in `content`.
pub fn substitute(content: &str, vars: &BTreeMap<String, String>) -> String {
    PLACEHOLDER_RE
        .replace_all(content, |caps: &Captures| match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Process each mapping in order and return the written destinations.
pub fn process(mappings: &[ReadmeMapping], vars: &BTreeMap<String, String>) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for mapping in mappings {
        if !mapping.source.exists() {
            return Err(AuttajaError::IoError(format!(
                "README source '{}' does not exist",
                mapping.source.display()
            )));
        }

        if mapping.source.is_dir() {
            process_directory(&mapping.source, &mapping.destination, vars, &mut written)?;
        } else if is_template(&mapping.source) {
            let destination = strip_suffix(&mapping.destination);
            written.push(process_file(&mapping.source, &destination, vars)?);
        } else {
            debug!(source = %mapping.source.display(), "not a template, skipping");
        }
    }

    Ok(written)
}

fn process_directory(
    source: &Path,
    destination: &Path,
    vars: &BTreeMap<String, String>,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            AuttajaError::IoError(format!("failed to walk '{}': {}", source.display(), e))
        })?;
        if !entry.file_type().is_file() || !is_template(entry.path()) {
            continue;
        }

        let relative = entry.path().strip_prefix(source).map_err(|e| {
            AuttajaError::IoError(format!("failed to mirror '{}': {}", entry.path().display(), e))
        })?;
        let target = strip_suffix(&destination.join(relative));
        written.push(process_file(entry.path(), &target, vars)?);
    }
    Ok(())
}

fn process_file(source: &Path, destination: &Path, vars: &BTreeMap<String, String>) -> Result<PathBuf> {
    let content = fs::read_to_string(source).map_err(|e| {
        AuttajaError::IoError(format!("failed to read '{}': {}", source.display(), e))
    })?;

    atomic_write_file(destination, &substitute(&content, vars))?;
    Ok(destination.to_path_buf())
}

fn is_template(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.len() > TEMPLATE_SUFFIX.len() && n.ends_with(TEMPLATE_SUFFIX))
}

fn strip_suffix(path: &Path) -> PathBuf {
    match path.to_str().and_then(|p| p.strip_suffix(TEMPLATE_SUFFIX)) {
        Some(stripped) if !stripped.is_empty() => PathBuf::from(stripped),
        _ => path.to_path_buf(),
    }
}
