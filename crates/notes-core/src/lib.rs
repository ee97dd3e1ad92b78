//! # Notes Core
//!
//! Core library for notes - a password-protected, local title → content
//! note store encrypted at rest.
//!
//! This crate owns key derivation, authenticated encryption, the plaintext
//! record format, and the on-disk store, independent of the CLI.
//!
//! ## Architecture
//!
//! - **crypto**: scrypt key derivation and AES-256-GCM sealing
//! - **notes**: the in-memory note collection
//! - **storage**: record codec, `SecureStore`, and the password seam
//! - **fs**: atomic writes and the store lock

pub mod crypto;
pub mod error;
pub mod fs;
pub mod notes;
pub mod storage;

pub use error::{NotesError, Result};
pub use notes::Notes;
pub use storage::{PasswordPurpose, PasswordSource, SecureStore, StaticPassword};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
