//! Implementation of the `auttaja env` command.

use super::readme_mappings;
use crate::cli::EnvArgs;
use crate::config::Config;
use crate::error::Result;
use crate::expr::Resolver;
use crate::prompt::PromptRunner;
use crate::runner::{EnvRequest, run_env};
use crate::template::template_for;

/// Execute the `auttaja env` command against the terminal.
pub fn cmd_env(args: EnvArgs, config: &Config) -> Result<()> {
    let request = env_request(&args, config)?;
    let mut prompts = PromptRunner::stdio(Resolver::from_config(config)?);

    let report = run_env(&request, &mut prompts)?;

    for path in &report.written {
        println!("Created {}", path.display());
    }
    for path in &report.readme {
        println!("(Re)Created {}", path.display());
    }
    Ok(())
}

/// Build the run request: explicit paths win over configured templates.
fn env_request(args: &EnvArgs, config: &Config) -> Result<EnvRequest> {
    let templates = if args.paths.is_empty() {
        config.template_paths()
    } else {
        args.paths.iter().map(|p| template_for(p)).collect()
    };

    Ok(EnvRequest {
        templates,
        force_recreate: args.force,
        readme: readme_mappings(config, &args.readme)?,
    })
}
