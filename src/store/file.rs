//! Portable file-backed store.
//!
//! Each key maps to `<namespace root>/storage/<key>`, holding the secret's
//! raw bytes with no text transformation. Nothing is encrypted; files are
//! only protected by owner-only permissions.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::{Result, SafeKeepingError};
use crate::paths;

use super::{KeyListing, SecretStore};

/// File-per-key secret store rooted at a namespace's `storage` directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store for a namespace root, creating `storage/` (0700) if
    /// it does not exist yet.
    pub fn open(namespace_root: &Path) -> Result<Self> {
        let dir = namespace_root.join(paths::STORAGE_DIR);
        paths::ensure_private_dir(&dir)?;
        Ok(Self { dir })
    }

    /// The directory holding the secret files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Map a key to its file, refusing anything that is not a single plain
    /// path component.
    ///
    /// The raw contract does not enforce the key charset, but it must never
    /// let a caller escape the storage directory or collide with temp files.
    fn secret_path(&self, key: &str) -> Result<PathBuf> {
        let reason = if key.is_empty() {
            Some("key cannot be empty")
        } else if key.starts_with('.') {
            Some("key cannot start with '.'")
        } else if key.contains(['/', '\\', '\0']) {
            Some("key cannot contain path separators or NUL")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(SafeKeepingError::InvalidKey {
                key: key.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(self.dir.join(key)),
        }
    }
}

impl SecretStore for FileStore {
    fn backend_name(&self) -> &'static str {
        "file"
    }

    fn store(&self, key: &str, secret: &[u8]) -> Result<()> {
        let path = self.secret_path(key)?;

        let mut file = paths::create_private_file(&path)?;
        file.write_all(secret)?;
        file.flush()?;

        tracing::debug!(key, bytes = secret.len(), "stored secret file");
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.secret_path(key)?;

        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let path = self.secret_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(key, "removed secret file");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self) -> Result<KeyListing> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(KeyListing::Keys(Vec::new()))
            }
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            keys.push(name);
        }

        keys.sort();
        Ok(KeyListing::Keys(keys))
    }
}
