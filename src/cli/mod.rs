//! CLI argument parsing for auttaja.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Auttaja: generate .env files from annotated templates.
///
/// Every declared variable without a value is asked for interactively;
/// defaults can come from other variables, shell commands or arithmetic.
#[derive(Parser, Debug)]
#[command(name = "auttaja")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Configuration file to read instead of `.auttaja.yaml`.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log more (-v for info, -vv for debug). Ignored when AUTTAJA_LOG is set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available commands for auttaja.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create or update env files from their templates (the default).
    ///
    /// Existing destination files are read first so only missing
    /// variables are asked for.
    Env(EnvArgs),

    /// Fill `{#name#}` placeholders in README/doc templates.
    ///
    /// Values are taken from the current env files.
    Readme(ReadmeArgs),
}

/// Arguments for the `env` command.
#[derive(Args, Debug, Default)]
pub struct EnvArgs {
    /// Templates (or their destination files) to process.
    ///
    /// Defaults to the configured templates.
    pub paths: Vec<PathBuf>,

    /// Ignore existing destination files and ask for every variable again.
    #[arg(short, long)]
    pub force: bool,

    /// README mapping to process afterwards, as SRC=DEST (repeatable).
    #[arg(long, value_name = "SRC=DEST")]
    pub readme: Vec<String>,
}

/// Arguments for the `readme` command.
#[derive(Args, Debug)]
pub struct ReadmeArgs {
    /// Mappings as SRC=DEST; adds to the configured ones.
    #[arg(value_name = "SRC=DEST")]
    pub mappings: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
