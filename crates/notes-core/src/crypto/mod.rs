//! Cryptographic operations for the note store.
//!
//! - **scrypt**: memory-hard key derivation from the user's password
//! - **AES-256-GCM**: authenticated encryption of the whole store
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the encrypted store file
//! - Offline brute-force attacks on the password
//! - Tampering with the store file (detected on load)
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Precomputation across stores sharing a password (the salt is fixed)

pub mod cipher;
pub mod key;
pub mod password;

pub use cipher::{open, seal};
pub use key::{derive_key, DerivedKey, KdfParams};
pub use password::password_warnings;
