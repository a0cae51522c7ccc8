//! Exit code constants for the auttaja CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, filesystem failure)
//! - 2: Configuration error (bad template settings, unresolved variable)
//! - 3: Format error (path does not end in `.template`)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, closed input, or a filesystem failure.
pub const USER_ERROR: i32 = 1;

/// Configuration error: malformed settings JSON, unknown `env(...)` key,
/// or a variable with no value at write time.
pub const CONFIG_ERROR: i32 = 2;

/// Format error: a destination was derived from a path without `.template`.
pub const FORMAT_ERROR: i32 = 3;
