//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// - 0: Success
/// - 1: General error (unhandled `anyhow` errors)
/// - 2: Usage error (reserved by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Unknown state, missing config, and similar lookups.
    pub const NOT_FOUND: i32 = 3;

    /// Rejected candidate record or unusable arguments.
    pub const INVALID_INPUT: i32 = 4;
}
