//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure (I/O, crypto setup).
    pub const GENERAL: i32 = 1;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password, tampered store, too many attempts).
    pub const AUTH_FAILED: i32 = 5;

    /// Decrypted store is malformed.
    pub const INTEGRITY_FAILED: i32 = 6;

    /// Another process holds the store lock.
    pub const STORE_IN_USE: i32 = 7;
}

/// Environment variable holding the store password.
pub const PASSWORD_ENV: &str = "NOTES_PASSWORD";

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "NOTES_CONFIG";

/// Password attempts allowed on an interactive terminal.
pub const MAX_PASSWORD_ATTEMPTS: u32 = 3;
