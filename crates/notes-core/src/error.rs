//! Error types for notes core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for notes operations.
pub type Result<T> = std::result::Result<T, NotesError>;

/// Core error type for notes operations.
#[derive(Debug, Error)]
pub enum NotesError {
    /// Decryption integrity check failed (wrong password, corrupted or tampered file)
    #[error("Authentication failed: wrong password or corrupted store")]
    AuthenticationFailed,

    /// Decrypted plaintext is not a valid note record set
    #[error("Format error on line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// Another process holds the store lock
    #[error("Store already in use (lock file {})", .0.display())]
    StoreInUse(PathBuf),

    /// The password collaborator could not supply a password
    #[error("Password unavailable: {0}")]
    PasswordUnavailable(String),

    /// Key derivation, randomness, or cipher setup failure
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Invalid user input (title or content rejected)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl NotesError {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        NotesError::Format {
            line,
            reason: reason.into(),
        }
    }
}
