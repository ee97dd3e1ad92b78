//! Password acquisition seam.
//!
//! The store never reads a terminal itself. Whoever drives it (the CLI, a
//! test) supplies the password through [`PasswordSource`].

use secrecy::{ExposeSecret, SecretString};

use crate::error::Result;

/// Why the store is asking for a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordPurpose {
    /// Decrypting an existing store.
    Unlock,
    /// Encrypting a store that was empty on disk; a collaborator may ask for confirmation.
    Create,
}

/// Supplies the password protecting a store.
///
/// A `SecureStore` calls this at most once per instance.
pub trait PasswordSource {
    fn password(&mut self, purpose: PasswordPurpose) -> Result<SecretString>;
}

/// A password known up front (environment variable, tests).
pub struct StaticPassword {
    password: SecretString,
}

impl StaticPassword {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: SecretString::from(password.into()),
        }
    }
}

impl std::fmt::Debug for StaticPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticPassword")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl PasswordSource for StaticPassword {
    fn password(&mut self, _purpose: PasswordPurpose) -> Result<SecretString> {
        Ok(SecretString::from(self.password.expose_secret().to_string()))
    }
}

impl<S: PasswordSource + ?Sized> PasswordSource for &mut S {
    fn password(&mut self, purpose: PasswordPurpose) -> Result<SecretString> {
        (**self).password(purpose)
    }
}
