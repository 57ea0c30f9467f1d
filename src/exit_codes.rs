//! Exit code constants for the mimic CLI.
//!
//! - 0: Success
//! - 1: User error (bad arguments, unreadable input)
//! - 2: Configuration failure (unreadable or invalid config file)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing prompt, conflicting flags, or unreadable stdin.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: config file could not be read or failed validation.
pub const CONFIG_FAILURE: i32 = 2;
