//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for an auttaja run.
///
/// This struct represents the contents of `.auttaja.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Template files processed by `env` when no paths are given.
    #[serde(default = "default_templates")]
    pub templates: Vec<String>,

    /// Shell used for `shell(...)` defaults; the command text is appended
    /// as the final argument (default: "sh -c").
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Whether `calc(...)`/`php(...)` default expressions are evaluated.
    #[serde(default = "default_true")]
    pub allow_calc: bool,

    /// README/doc templating mappings (source -> destination) run after `env`.
    #[serde(default)]
    pub readme: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates: default_templates(),
            shell: default_shell(),
            allow_calc: default_true(),
            readme: BTreeMap::new(),
        }
    }
}
