//! Configuration model for auttaja.
//!
//! This module defines the Config struct that represents `.auttaja.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values. The file is
//! optional: a missing file means an all-default configuration.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::Config;
pub use types::{DEFAULT_CONFIG_FILE, ReadmeMapping};
