//! Mapping between template paths, destination paths and scopes.

use crate::error::{AuttajaError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Suffix every template path ends with.
pub const TEMPLATE_SUFFIX: &str = ".template";

/// Scope of templates that carry no explicit one (`.env.template`).
pub const GLOBAL_SCOPE: &str = "global";

static SCOPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.env(\.(\w*))?\.template$").expect("scope pattern is valid")
});

/// Destination written for `template`: the same path without `.template`.
pub fn destination_from_template(template: &Path) -> Result<PathBuf> {
    let raw = template.to_string_lossy();
    match raw.strip_suffix(TEMPLATE_SUFFIX) {
        Some(destination)
            if !destination.is_empty() && !destination.ends_with(std::path::MAIN_SEPARATOR) =>
        {
            Ok(PathBuf::from(destination))
        }
        _ => Err(AuttajaError::FormatError(format!(
            "Templates must end in {}; \"{}\" is invalid.",
            TEMPLATE_SUFFIX, raw
        ))),
    }
}

/// Template path for a path that may name either the template or its destination.
pub fn template_for(path: &Path) -> PathBuf {
    if path.to_string_lossy().ends_with(TEMPLATE_SUFFIX) {
        path.to_path_buf()
    } else {
        let mut raw = path.as_os_str().to_os_string();
        raw.push(TEMPLATE_SUFFIX);
        PathBuf::from(raw)
    }
}

/// Scope encoded in a template file name: `.env.<scope>.template` gives
/// `<scope>`; anything else is `global`.
pub fn scope_from_template_path(template: &Path) -> String {
    let raw = template.to_string_lossy();
    SCOPE_PATTERN
        .captures(&raw)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
        .filter(|scope| !scope.is_empty())
        .unwrap_or(GLOBAL_SCOPE)
        .to_string()
}
