//! Error types for the auttaja CLI.
//!
//! Uses thiserror for derive macros. Every variant is fatal for the run;
//! validation of user input is handled locally by the prompt loop and
//! never surfaces as an `AuttajaError`.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for auttaja operations.
#[derive(Error, Debug)]
pub enum AuttajaError {
    /// A path could not be mapped to or from its `.template` form.
    #[error("{0}")]
    FormatError(String),

    /// Template settings, default expressions or config values are unusable.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Standard input closed or failed while a question was pending.
    #[error("Input error: {0}")]
    InputError(String),

    /// A filesystem operation failed.
    #[error("{0}")]
    IoError(String),
}

impl AuttajaError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AuttajaError::FormatError(_) => exit_codes::FORMAT_ERROR,
            AuttajaError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            AuttajaError::InputError(_) => exit_codes::USER_ERROR,
            AuttajaError::IoError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for auttaja operations.
pub type Result<T> = std::result::Result<T, AuttajaError>;
