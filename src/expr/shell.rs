//! Shell command execution for `shell(...)` defaults.

use crate::error::{AuttajaError, Result};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Run `command` through `shell` (program plus leading arguments) and
/// return its captured standard output.
///
/// A non-zero exit status is logged but the output is still returned;
/// failing to spawn the shell at all is a configuration error.
pub fn run_shell(shell: &[String], command: &str) -> Result<String> {
    let (program, args) = shell.split_first().ok_or_else(|| {
        AuttajaError::ConfigError("no shell configured for shell(...) defaults".to_string())
    })?;

    let output = Command::new(program)
        .args(args)
        .arg(command)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| {
            AuttajaError::ConfigError(format!(
                "failed to execute shell command '{}' with '{}': {}",
                command,
                shell_words::join(shell),
                e
            ))
        })?;

    if output.status.success() {
        debug!(command, "shell command succeeded");
    } else {
        warn!(command, status = ?output.status.code(), "shell command exited with non-zero status");
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
