//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::ReadmeMapping;
use crate::error::{AuttajaError, Result};
use crate::template::TEMPLATE_SUFFIX;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AuttajaError::IoError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| AuttajaError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            AuttajaError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - every entry of `templates` must end in `.template`
    /// - `shell` must split into at least one word
    pub fn validate(&self) -> Result<()> {
        for template in &self.templates {
            if !template.ends_with(TEMPLATE_SUFFIX) {
                return Err(AuttajaError::FormatError(format!(
                    "Templates must end in {}; \"{}\" is invalid.",
                    TEMPLATE_SUFFIX, template
                )));
            }
        }

        self.shell_command()?;
        Ok(())
    }

    /// The configured shell split into program and leading arguments.
    pub fn shell_command(&self) -> Result<Vec<String>> {
        let words = shell_words::split(&self.shell).map_err(|e| {
            AuttajaError::ConfigError(format!(
                "config validation failed: cannot parse shell '{}': {}",
                self.shell, e
            ))
        })?;

        if words.is_empty() {
            return Err(AuttajaError::ConfigError(
                "config validation failed: shell must not be empty".to_string(),
            ));
        }

        Ok(words)
    }

    /// Template paths as `PathBuf`s, in configured order.
    pub fn template_paths(&self) -> Vec<PathBuf> {
        self.templates.iter().map(PathBuf::from).collect()
    }

    /// Configured README mappings, in source order.
    pub fn readme_mappings(&self) -> Vec<ReadmeMapping> {
        self.readme
            .iter()
            .map(|(source, destination)| ReadmeMapping {
                source: PathBuf::from(source),
                destination: PathBuf::from(destination),
            })
            .collect()
    }
}
