//! Password strength warnings.
//!
//! Weak passwords are accepted; these checks only tell the caller what to
//! warn about.

/// Passwords shorter than this (in bytes) produce a warning.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Return warnings for a password that will still be accepted.
///
/// # Examples
///
/// ```
/// use notes_core::crypto::password_warnings;
///
/// assert!(password_warnings("correct-horse").is_empty());
/// assert!(!password_warnings("").is_empty());
/// ```
pub fn password_warnings(password: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    if password.trim().is_empty() {
        warnings.push("Password is empty; the store key is predictable".to_string());
        return warnings;
    }

    if password.len() < MIN_PASSWORD_LENGTH {
        warnings.push(format!(
            "Password is shorter than {} characters (got {})",
            MIN_PASSWORD_LENGTH,
            password.len()
        ));
    }

    warnings
}
