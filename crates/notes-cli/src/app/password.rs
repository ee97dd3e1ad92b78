//! Password acquisition and store loading with retry logic.

use std::io::IsTerminal;
use std::path::Path;

use dialoguer::Password;
use notes_core::crypto::password_warnings;
use notes_core::{Notes, NotesError, PasswordPurpose, PasswordSource, SecureStore};
use secrecy::SecretString;

use crate::constants::{MAX_PASSWORD_ATTEMPTS, PASSWORD_ENV};
use crate::errors::CliError;

/// Password from NOTES_PASSWORD, or an interactive prompt on a TTY.
pub struct TerminalPassword {
    env_password: Option<String>,
    interactive: bool,
}

impl TerminalPassword {
    pub fn from_env() -> Self {
        let env_password = std::env::var(PASSWORD_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        Self {
            env_password,
            interactive: std::io::stdin().is_terminal(),
        }
    }

    /// Whether a wrong password can be retried by prompting again.
    pub fn can_retry(&self) -> bool {
        self.interactive && self.env_password.is_none()
    }

    fn prompt(&self, purpose: PasswordPurpose) -> Result<String, NotesError> {
        if !self.interactive {
            return Err(NotesError::PasswordUnavailable(format!(
                "No password provided and no TTY available. Set {}.",
                PASSWORD_ENV
            )));
        }
        let prompt = Password::new().allow_empty_password(true);
        let result = match purpose {
            PasswordPurpose::Unlock => prompt.with_prompt("Password").interact(),
            PasswordPurpose::Create => prompt
                .with_prompt("New store password")
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact(),
        };
        result.map_err(|e| NotesError::PasswordUnavailable(format!("Failed to read password: {}", e)))
    }
}

impl PasswordSource for TerminalPassword {
    fn password(&mut self, purpose: PasswordPurpose) -> notes_core::Result<SecretString> {
        let password = match self.env_password.as_ref() {
            Some(value) => value.clone(),
            None => self.prompt(purpose)?,
        };
        if purpose == PasswordPurpose::Create {
            for warning in password_warnings(&password) {
                tracing::warn!("{}", warning);
            }
        }
        Ok(SecretString::from(password))
    }
}

/// Open and load the store, prompting again after a wrong password on a TTY.
pub fn open_store_with_retry(
    path: &Path,
) -> anyhow::Result<(SecureStore<TerminalPassword>, Notes)> {
    let mut store = SecureStore::open(path, TerminalPassword::from_env())?;
    let max_attempts = if store.password_source().can_retry() {
        MAX_PASSWORD_ATTEMPTS
    } else {
        1
    };
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        match store.load() {
            Ok(notes) => return Ok((store, notes)),
            Err(NotesError::AuthenticationFailed) if max_attempts > 1 => {
                let remaining = max_attempts.saturating_sub(attempts);
                if remaining == 0 {
                    return Err(CliError::auth_failed_with_hint(
                        "Too many failed password attempts.",
                        "Hint: If you forgot your password, the store cannot be recovered.\n      Backups use the same password.",
                    )
                    .into());
                }
                eprintln!(
                    "Incorrect password. {} attempt{} remaining.",
                    remaining,
                    if remaining == 1 { "" } else { "s" }
                );
                store.clear_key();
            }
            Err(err) => return Err(err.into()),
        }
    }
}
