//! Implementation of the `auttaja readme` command.

use super::readme_mappings;
use crate::cli::ReadmeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::runner::run_readme;
use tracing::warn;

/// Execute the `auttaja readme` command.
pub fn cmd_readme(args: ReadmeArgs, config: &Config) -> Result<()> {
    let mappings = readme_mappings(config, &args.mappings)?;
    if mappings.is_empty() {
        warn!("no README mappings configured or given");
        return Ok(());
    }

    for path in run_readme(&config.template_paths(), &mappings)? {
        println!("(Re)Created {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DirGuard;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn readme_command_fills_placeholders_from_env_files() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());
        fs::write(".env", "APP_NAME=shop\n").unwrap();
        fs::write("README.md.template", "# {#global.APP_NAME#}\n").unwrap();

        let args = ReadmeArgs {
            mappings: vec!["README.md.template=README.md".to_string()],
        };
        cmd_readme(args, &Config::default()).unwrap();

        assert_eq!(fs::read_to_string("README.md").unwrap(), "# shop\n");
    }

    #[test]
    fn readme_command_without_mappings_is_noop() {
        let args = ReadmeArgs { mappings: vec![] };
        cmd_readme(args, &Config::default()).unwrap();
    }
}
