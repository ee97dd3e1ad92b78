//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes and carry a remediation hint,
//! so a wrong password and a broken disk are never reported the same way.

use std::fmt;

use notes_core::NotesError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Wrong password or tampered store
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Decrypted records are malformed
    IntegrityFailed { message: String, hint: String },

    /// Store lock held elsewhere
    StoreInUse { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Anything else (I/O, crypto setup)
    General { message: String, hint: Option<String> },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            CliError::AuthFailed { message, .. }
            | CliError::IntegrityFailed { message, .. }
            | CliError::StoreInUse { message, .. }
            | CliError::General { message, .. } => message,
            CliError::InvalidInput(message) => message,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::AuthFailed { hint, .. } | CliError::General { hint, .. } => hint.as_deref(),
            CliError::IntegrityFailed { hint, .. } | CliError::StoreInUse { hint, .. } => {
                Some(hint)
            }
            CliError::InvalidInput(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::IntegrityFailed { .. } => exit_codes::INTEGRITY_FAILED,
            CliError::StoreInUse { .. } => exit_codes::STORE_IN_USE,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::General { .. } => exit_codes::GENERAL,
        }
    }
}

impl From<NotesError> for CliError {
    fn from(err: NotesError) -> Self {
        match err {
            NotesError::AuthenticationFailed => CliError::auth_failed_with_hint(
                "Incorrect password or corrupted store.",
                "Hint: Retry the password. If it is correct, the store file was modified; restore it from a backup.",
            ),
            NotesError::PasswordUnavailable(reason) => CliError::auth_failed_with_hint(
                reason,
                "Hint: Set NOTES_PASSWORD or run in a terminal.",
            ),
            NotesError::Format { line, reason } => CliError::IntegrityFailed {
                message: format!("Store contents are malformed (line {}: {}).", line, reason),
                hint: "Hint: Restore the store from a backup.".to_string(),
            },
            NotesError::StoreInUse(lock) => CliError::StoreInUse {
                message: "Store already in use.".to_string(),
                hint: format!(
                    "Hint: Another notes process holds {}. Wait for it to finish.",
                    lock.display()
                ),
            },
            NotesError::InvalidInput(message) => CliError::InvalidInput(message),
            NotesError::Io { source } => CliError::General {
                message: format!("I/O error: {}", source),
                hint: Some("Hint: Check the store path, permissions, and free disk space.".to_string()),
            },
            NotesError::Crypto(message) => CliError::General {
                message,
                hint: None,
            },
        }
    }
}
