//! Error types for the mimic CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//!
//! The agent core itself has no failure mode: every prompt yields some
//! response. Errors exist only at the process boundary, where arguments,
//! stdin, or the config file can be unusable.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for mimic operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum MimicError {
    /// User provided invalid arguments or input could not be read.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be read, parsed, or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl MimicError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MimicError::UserError(_) => exit_codes::USER_ERROR,
            MimicError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
        }
    }
}

/// Result type alias for mimic operations.
pub type Result<T> = std::result::Result<T, MimicError>;
