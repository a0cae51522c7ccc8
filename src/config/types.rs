//! Configuration types and defaults for auttaja.

use crate::error::{AuttajaError, Result};
use std::path::PathBuf;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = ".auttaja.yaml";

/// A README/doc templating source paired with its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeMapping {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl ReadmeMapping {
    /// Parse a `SRC=DEST` command-line pair.
    pub fn parse(pair: &str) -> Result<Self> {
        match pair.split_once('=') {
            Some((source, destination)) if !source.is_empty() && !destination.is_empty() => {
                Ok(Self {
                    source: PathBuf::from(source),
                    destination: PathBuf::from(destination),
                })
            }
            _ => Err(AuttajaError::IoError(format!(
                "invalid readme mapping '{}': expected SRC=DEST",
                pair
            ))),
        }
    }
}

// Default value functions for serde
pub(crate) fn default_templates() -> Vec<String> {
    vec![".env.template".to_string(), ".env.test.template".to_string()]
}
pub(crate) fn default_shell() -> String {
    "sh -c".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
