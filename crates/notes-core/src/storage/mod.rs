//! Encrypted persistence for the note collection.
//!
//! ## Storage model
//!
//! - One file per store; an empty file is an empty store
//! - Non-empty file: `nonce || AES-256-GCM ciphertext || tag` over the
//!   line-encoded collection (see [`codec`])
//! - Key: scrypt over the password with a fixed empty salt
//! - Saves are atomic (temp file + rename); a lock file guards the
//!   load-mutate-save cycle

pub mod codec;
pub mod secure_store;
pub mod traits;

pub use secure_store::SecureStore;
pub use traits::{PasswordPurpose, PasswordSource, StaticPassword};
