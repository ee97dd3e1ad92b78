//! Key derivation using scrypt.
//!
//! This module derives the store key from a password with scrypt, which is
//! memory-hard and makes offline brute force expensive.
//!
//! The salt is empty. Two stores protected by the same password therefore
//! share a key; every existing store depends on this, so changing it makes
//! old files unreadable.

use scrypt::Params;
use zeroize::ZeroizeOnDrop;

use crate::error::{NotesError, Result};

/// Default scrypt cost: N = 2^15 = 32768.
const SCRYPT_LOG_N: u8 = 15;
/// Default scrypt block size factor.
const SCRYPT_R: u32 = 8;
/// Default scrypt parallelization factor.
const SCRYPT_P: u32 = 1;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// Fixed salt used for every store.
const SALT: &[u8] = b"";

/// Work parameters for scrypt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    log_n: u8,
    r: u32,
    p: u32,
}

impl KdfParams {
    /// Create parameters, rejecting combinations scrypt does not accept.
    pub fn new(log_n: u8, r: u32, p: u32) -> Result<Self> {
        let params = Self { log_n, r, p };
        params.scrypt_params()?;
        Ok(params)
    }

    pub fn log_n(&self) -> u8 {
        self.log_n
    }

    pub fn r(&self) -> u32 {
        self.r
    }

    pub fn p(&self) -> u32 {
        self.p
    }

    fn scrypt_params(&self) -> Result<Params> {
        Params::new(self.log_n, self.r, self.p, KEY_LENGTH)
            .map_err(|e| NotesError::Crypto(format!("Invalid scrypt parameters: {}", e)))
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            log_n: SCRYPT_LOG_N,
            r: SCRYPT_R,
            p: SCRYPT_P,
        }
    }
}

/// A cryptographic key derived from a password.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a 32-byte key from a password using scrypt.
///
/// Deterministic: the same password and parameters always produce the same
/// key. An empty password is accepted; see
/// [`password_warnings`](crate::crypto::password_warnings).
///
/// # Examples
///
/// ```
/// use notes_core::crypto::{derive_key, KdfParams};
///
/// let params = KdfParams::new(10, 8, 1).unwrap();
/// let key = derive_key(b"correct-horse", &params).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &[u8], params: &KdfParams) -> Result<DerivedKey> {
    let scrypt_params = params.scrypt_params()?;

    let mut key_bytes = [0u8; KEY_LENGTH];
    scrypt::scrypt(password, SALT, &scrypt_params, &mut key_bytes)
        .map_err(|e| NotesError::Crypto(format!("Key derivation failed: {}", e)))?;

    Ok(DerivedKey::from_bytes(key_bytes))
}
