//! AES-256-GCM sealing of the whole store.
//!
//! Blob layout: `nonce (12) || ciphertext || tag (16)`, no associated data.
//! A fresh random nonce is drawn from the OS for every seal, so a nonce is
//! never reused under the same key across saves.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::crypto::key::DerivedKey;
use crate::error::{NotesError, Result};

/// Nonce length in bytes.
pub const NONCE_LENGTH: usize = 12;

/// Authentication tag length in bytes.
pub const TAG_LENGTH: usize = 16;

fn cipher_for(key: &DerivedKey) -> Result<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| NotesError::Crypto(format!("Failed to create cipher: {}", e)))
}

/// Encrypt `plaintext` under `key`, returning the complete file blob.
pub fn seal(key: &DerivedKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = cipher_for(key)?;

    let mut nonce = [0u8; NONCE_LENGTH];
    getrandom::getrandom(&mut nonce)
        .map_err(|e| NotesError::Crypto(format!("Failed to generate nonce: {}", e)))?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| NotesError::Crypto("Encryption failed".to_string()))?;

    let mut blob = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);
    Ok(blob)
}

/// Decrypt a blob produced by [`seal`].
///
/// # Errors
///
/// Returns `NotesError::AuthenticationFailed` if the key is wrong, the blob
/// was modified, or it is too short to hold a nonce and tag.
pub fn open(key: &DerivedKey, blob: &[u8]) -> Result<Vec<u8>> {
    if blob.len() < NONCE_LENGTH + TAG_LENGTH {
        return Err(NotesError::AuthenticationFailed);
    }
    let (nonce, ciphertext) = blob.split_at(NONCE_LENGTH);

    cipher_for(key)?
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| NotesError::AuthenticationFailed)
}
