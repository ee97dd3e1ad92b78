//! Encrypted single-file note store.
//!
//! The whole collection is serialized, sealed with AES-256-GCM under a
//! scrypt-derived key, and written over the store file in one atomic step.
//! An empty file is an empty store.

use std::fs::{self, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};

use secrecy::ExposeSecret;

use crate::crypto::{self, derive_key, DerivedKey, KdfParams};
use crate::error::Result;
use crate::fs::{write_atomic, StoreLock};
use crate::notes::Notes;
use crate::storage::codec;
use crate::storage::traits::{PasswordPurpose, PasswordSource};

/// Password-protected note store backed by one file.
///
/// Holds an exclusive lock on the store for its whole lifetime, so a
/// load-mutate-save cycle cannot interleave with another process.
pub struct SecureStore<S: PasswordSource> {
    path: PathBuf,
    source: S,
    params: KdfParams,
    key: Option<DerivedKey>,
    _lock: StoreLock,
}

impl<S: PasswordSource> SecureStore<S> {
    /// Open the store at `path`, taking its lock.
    ///
    /// Nothing is read and no password is requested until [`load`](Self::load)
    /// or [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns `NotesError::StoreInUse` if another process holds the lock.
    pub fn open(path: impl Into<PathBuf>, source: S) -> Result<Self> {
        let path = path.into();
        let lock = StoreLock::acquire(&path)?;
        Ok(Self {
            path,
            source,
            params: KdfParams::default(),
            key: None,
            _lock: lock,
        })
    }

    /// Use non-default scrypt parameters.
    ///
    /// Stores written with one set of parameters cannot be read with another.
    pub fn with_kdf_params(mut self, params: KdfParams) -> Self {
        self.params = params;
        self.key = None;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn password_source(&self) -> &S {
        &self.source
    }

    /// Drop the cached key so the next load or save asks for the password again.
    pub fn clear_key(&mut self) {
        self.key = None;
    }

    /// Read and decrypt the store.
    ///
    /// The file (and its parent directories) are created empty if missing.
    /// An empty file yields an empty collection without asking for a password.
    ///
    /// # Errors
    ///
    /// - `NotesError::Io` if the file cannot be created or read
    /// - `NotesError::AuthenticationFailed` for a wrong password or a damaged file
    /// - `NotesError::Format` if the decrypted records are malformed
    pub fn load(&mut self) -> Result<Notes> {
        let data = self.read_or_create()?;
        if data.is_empty() {
            tracing::info!(path = %self.path.display(), "store is empty");
            return Ok(Notes::new());
        }

        let key = self.key(PasswordPurpose::Unlock)?;
        let plaintext = crypto::open(key, &data)?;
        let notes = codec::decode(&plaintext)?;
        tracing::info!(path = %self.path.display(), notes = notes.len(), "loaded store");
        Ok(notes)
    }

    /// Encrypt `notes` and atomically replace the store file.
    ///
    /// Every save uses a fresh nonce, so saving the same collection twice
    /// produces different bytes.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Io` if the file cannot be written; the previous
    /// file content is left in place.
    pub fn save(&mut self, notes: &Notes) -> Result<()> {
        let purpose = if self.is_empty_on_disk() {
            PasswordPurpose::Create
        } else {
            PasswordPurpose::Unlock
        };
        let plaintext = codec::encode(notes);
        let key = self.key(purpose)?;
        let blob = crypto::seal(key, plaintext.as_bytes())?;

        self.ensure_parent_dir()?;
        write_atomic(&self.path, &blob)?;
        tracing::info!(path = %self.path.display(), notes = notes.len(), "saved store");
        Ok(())
    }

    fn key(&mut self, purpose: PasswordPurpose) -> Result<&DerivedKey> {
        let key = match self.key.take() {
            Some(key) => key,
            None => {
                let password = self.source.password(purpose)?;
                tracing::debug!(
                    log_n = self.params.log_n(),
                    r = self.params.r(),
                    p = self.params.p(),
                    "deriving store key"
                );
                derive_key(password.expose_secret().as_bytes(), &self.params)?
            }
        };
        Ok(self.key.insert(key))
    }

    fn read_or_create(&self) -> Result<Vec<u8>> {
        self.ensure_parent_dir()?;
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Ok(fs::create_dir_all(parent)?),
            _ => Ok(()),
        }
    }

    fn is_empty_on_disk(&self) -> bool {
        fs::metadata(&self.path)
            .map(|meta| meta.len() == 0)
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotesError;
    use crate::storage::traits::StaticPassword;
    use secrecy::SecretString;
    use tempfile::tempdir;

    /// Records every password request.
    struct CountingSource {
        password: &'static str,
        requests: Vec<PasswordPurpose>,
    }

    impl CountingSource {
        fn new(password: &'static str) -> Self {
            Self {
                password,
                requests: Vec::new(),
            }
        }
    }

    impl PasswordSource for CountingSource {
        fn password(&mut self, purpose: PasswordPurpose) -> Result<SecretString> {
            self.requests.push(purpose);
            Ok(SecretString::from(self.password.to_string()))
        }
    }

    fn cheap() -> KdfParams {
        KdfParams::new(10, 8, 1).unwrap()
    }

    #[test]
    fn test_load_missing_file_creates_empty_store_without_prompt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("notes.dat");
        let mut source = CountingSource::new("correct-horse");

        let mut store = SecureStore::open(&path, &mut source)
            .unwrap()
            .with_kdf_params(cheap());
        let notes = store.load().unwrap();
        drop(store);

        assert!(notes.is_empty());
        assert!(path.exists());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
        assert!(source.requests.is_empty());
    }

    #[test]
    fn test_password_requested_once_across_load_and_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.dat");

        let mut notes = Notes::new();
        notes.insert("groceries", "milk, eggs").unwrap();
        {
            let mut store = SecureStore::open(&path, StaticPassword::new("correct-horse"))
                .unwrap()
                .with_kdf_params(cheap());
            store.save(&notes).unwrap();
        }

        let mut source = CountingSource::new("correct-horse");
        let mut store = SecureStore::open(&path, &mut source)
            .unwrap()
            .with_kdf_params(cheap());
        let mut loaded = store.load().unwrap();
        loaded.insert("todo", "call mom").unwrap();
        store.save(&loaded).unwrap();
        drop(store);

        assert_eq!(source.requests, vec![PasswordPurpose::Unlock]);
    }

    #[test]
    fn test_first_save_of_empty_store_requests_create() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.dat");
        let mut source = CountingSource::new("correct-horse");

        let mut store = SecureStore::open(&path, &mut source)
            .unwrap()
            .with_kdf_params(cheap());
        let mut notes = store.load().unwrap();
        notes.insert("first", "note").unwrap();
        store.save(&notes).unwrap();
        drop(store);

        assert_eq!(source.requests, vec![PasswordPurpose::Create]);
    }

    #[test]
    fn test_clear_key_requests_password_again() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.dat");
        let mut source = CountingSource::new("correct-horse");

        let mut store = SecureStore::open(&path, &mut source)
            .unwrap()
            .with_kdf_params(cheap());
        store.save(&Notes::new()).unwrap();
        store.clear_key();
        store.load().unwrap();
        drop(store);

        assert_eq!(
            source.requests,
            vec![PasswordPurpose::Create, PasswordPurpose::Unlock]
        );
    }

    #[test]
    fn test_failed_load_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.dat");
        let mut notes = Notes::new();
        notes.insert("groceries", "milk").unwrap();
        {
            let mut store = SecureStore::open(&path, StaticPassword::new("correct-horse"))
                .unwrap()
                .with_kdf_params(cheap());
            store.save(&notes).unwrap();
        }
        let before = fs::read(&path).unwrap();

        let mut store = SecureStore::open(&path, StaticPassword::new("wrong-horse"))
            .unwrap()
            .with_kdf_params(cheap());
        let result = store.load();
        drop(store);

        assert!(matches!(result, Err(NotesError::AuthenticationFailed)));
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_failed_write_leaves_previous_store_loadable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.dat");
        let mut notes = Notes::new();
        notes.insert("groceries", "milk, eggs").unwrap();

        let mut store = SecureStore::open(&path, StaticPassword::new("correct-horse"))
            .unwrap()
            .with_kdf_params(cheap());
        store.save(&notes).unwrap();

        let occupied = dir.path().join("notes.dat.occupied.tmp");
        fs::write(&occupied, b"").unwrap();
        let result = crate::fs::write_atomic_via(store.path(), &occupied, b"not a sealed blob");
        assert!(result.is_err());

        store.clear_key();
        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.get("groceries"), Some("milk, eggs"));
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_open_while_locked_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.dat");

        let _held = SecureStore::open(&path, StaticPassword::new("correct-horse")).unwrap();
        let second = SecureStore::open(&path, StaticPassword::new("correct-horse"));

        assert!(matches!(second, Err(NotesError::StoreInUse(_))));
    }
}
