//! Command implementations for auttaja.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Running without a subcommand behaves like `env`.

mod env;
mod readme;

use crate::cli::{Cli, Command, EnvArgs};
use crate::config::{Config, DEFAULT_CONFIG_FILE, ReadmeMapping};
use crate::error::Result;
use std::path::Path;

/// Dispatch a parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        None => env::cmd_env(EnvArgs::default(), &config),
        Some(Command::Env(args)) => env::cmd_env(args, &config),
        Some(Command::Readme(args)) => readme::cmd_readme(args, &config),
    }
}

/// Load the explicit config file, or `.auttaja.yaml` if present.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::load_or_default(DEFAULT_CONFIG_FILE),
    }
}

/// Configured README mappings followed by the command-line ones.
fn readme_mappings(config: &Config, pairs: &[String]) -> Result<Vec<ReadmeMapping>> {
    let mut mappings = config.readme_mappings();
    for pair in pairs {
        mappings.push(ReadmeMapping::parse(pair)?);
    }
    Ok(mappings)
}
