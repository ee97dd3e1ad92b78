//! Filesystem utilities for atomic writes and store locking.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{NotesError, Result};

/// Move a fully written temp file over `destination`.
///
/// On Unix `rename` replaces the destination atomically, so the first error is
/// returned as is and the destination is never touched. Elsewhere, where
/// `rename` fails if the target exists, the old file is moved aside to
/// `<destination>.bak` first and moved back if the retry fails.
///
/// If the rename ultimately fails, the temp file is cleaned up.
#[cfg(unix)]
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    fs::rename(temp_path, destination).map_err(|err| {
        let _ = fs::remove_file(temp_path);
        err
    })
}

#[cfg(not(unix))]
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    let initial_err = match fs::rename(temp_path, destination) {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };
    if !destination.exists() {
        let _ = fs::remove_file(temp_path);
        return Err(initial_err);
    }

    let aside = aside_path_for(destination);
    if let Err(err) = fs::rename(destination, &aside) {
        let _ = fs::remove_file(temp_path);
        return Err(err);
    }

    match fs::rename(temp_path, destination) {
        Ok(()) => {
            let _ = fs::remove_file(&aside);
            Ok(())
        }
        Err(retry_err) => {
            let restored = fs::rename(&aside, destination);
            let _ = fs::remove_file(temp_path);
            Err(io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {}, restored: {})",
                    initial_err,
                    retry_err,
                    restored.is_ok()
                ),
            ))
        }
    }
}

#[cfg(not(unix))]
fn aside_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Path of a uniquely named temp file next to `path`.
pub fn temp_path_for(path: &Path) -> io::Result<PathBuf> {
    let parent = parent_dir(path);
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid store filename"))?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| io::Error::other(format!("System time error: {}", e)))?
        .as_nanos();
    Ok(parent.join(format!("{}.{}.tmp", filename, nanos)))
}

/// Replace `path` with `data` so that readers see either the old or the new content.
///
/// The data is written and synced to a temp file in the same directory, then
/// renamed over the destination. On failure the destination is untouched.
pub fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let temp_path = temp_path_for(path)?;
    write_atomic_via(path, &temp_path, data)
}

pub(crate) fn write_atomic_via(path: &Path, temp_path: &Path, data: &[u8]) -> io::Result<()> {
    // Only a temp file created here is ever removed.
    let mut file = new_file_options().open(temp_path)?;
    let written = file.write_all(data).and_then(|()| file.sync_all());
    drop(file);
    if let Err(err) = written {
        let _ = fs::remove_file(temp_path);
        return Err(err);
    }

    rename_with_fallback(temp_path, path)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(unix)]
fn new_file_options() -> OpenOptions {
    use std::os::unix::fs::OpenOptionsExt;
    let mut options = OpenOptions::new();
    options.write(true).create_new(true).mode(0o600);
    options
}

#[cfg(not(unix))]
fn new_file_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    options
}

/// Exclusive lock on a store, held on a `<store>.lock` file.
///
/// On Unix this is an `flock` advisory lock: the kernel drops it when the
/// holder exits for any reason, so a killed process never leaves the store
/// locked. The lock file itself stays in place. Elsewhere the lock is the
/// file's existence and it is removed when the guard is dropped.
#[derive(Debug)]
pub struct StoreLock {
    path: PathBuf,
    _file: File,
}

impl StoreLock {
    /// Acquire the lock for the store at `store_path`.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::StoreInUse` if another holder has the lock.
    pub fn acquire(store_path: &Path) -> Result<Self> {
        let path = lock_path_for(store_path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        match lock_file(&path) {
            Ok(file) => {
                tracing::debug!(lock = %path.display(), "acquired store lock");
                Ok(Self { path, _file: file })
            }
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::WouldBlock | io::ErrorKind::AlreadyExists
                ) =>
            {
                Err(NotesError::StoreInUse(path))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(unix)]
fn lock_file(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    use std::os::unix::io::AsRawFd;

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .mode(0o600)
        .open(path)?;
    // SAFETY: the descriptor belongs to `file`, which is open for the whole call.
    let rc = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(file)
}

#[cfg(not(unix))]
fn lock_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

#[cfg(not(unix))]
impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            tracing::warn!(lock = %self.path.display(), error = %err, "failed to remove store lock");
        }
    }
}

/// Path of the lock file guarding `store_path`.
pub fn lock_path_for(store_path: &Path) -> PathBuf {
    let mut name = store_path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}
