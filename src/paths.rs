//! Namespace resolution and private-directory hardening.
//!
//! On-disk layout for a namespace:
//!
//! ```text
//! <base>/safekeeping/<namespace>/storage/<key>   raw secret bytes
//! <base>/safekeeping/<namespace>/info.dat        "name|description\n" lines
//! ```
//!
//! Directories are created owner-only (0700) by the same call that creates
//! them. Files written through this module are created 0600.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{Result, SafeKeepingError};

/// Directory under the per-user data directory that holds all namespaces.
pub const APP_DIR: &str = "safekeeping";

/// Sub-directory of a namespace root holding one file per secret.
pub const STORAGE_DIR: &str = "storage";

/// Name of the description sidecar file inside a namespace root.
pub const INDEX_FILE: &str = "info.dat";

const MAX_NAMESPACE_LEN: usize = 255;

/// Resolve the platform's per-user data directory.
///
/// `~/.local/share` on Linux, `~/Library/Application Support` on macOS,
/// `%APPDATA%` on Windows.
pub fn default_base_dir() -> Result<PathBuf> {
    dirs::data_dir().ok_or(SafeKeepingError::NoDataDir)
}

/// Build the root directory of a namespace: `<base>/safekeeping/<namespace>`.
pub fn namespace_root(base: &Path, namespace: &str) -> Result<PathBuf> {
    validate_namespace(namespace)?;
    Ok(base.join(APP_DIR).join(namespace))
}

/// Validate that a namespace name is usable as a single directory name.
pub fn validate_namespace(name: &str) -> Result<()> {
    let reject = |reason: &str| {
        Err(SafeKeepingError::InvalidNamespace {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    };

    if name.is_empty() {
        return reject("namespace cannot be empty");
    }
    if name.len() > MAX_NAMESPACE_LEN {
        return reject("namespace cannot exceed 255 bytes");
    }
    if name == "." || name == ".." {
        return reject("namespace cannot be a relative path component");
    }
    if name.contains(['/', '\\', '\0']) {
        return reject("namespace cannot contain path separators or NUL");
    }
    Ok(())
}

/// Make sure `path` exists as a directory readable only by its owner.
///
/// Missing components (including the `safekeeping` private-data root) are
/// created with mode 0700 in the creating call itself, so there is no window
/// in which they exist with the default umask. Existing directories are left
/// as they are.
pub fn ensure_private_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder
        .create(path)
        .map_err(|source| SafeKeepingError::PrivateDir {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), "created private directory");
    Ok(())
}

/// Open `path` for writing, truncating any previous content.
///
/// A newly created file gets mode 0600.
pub fn create_private_file(path: &Path) -> std::io::Result<fs::File> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options.open(path)
}

/// Replace `path` with `contents` via a temp file in the same directory and
/// a rename, so a crash never leaves a truncated file behind.
///
/// The result is owner read/write only.
pub fn write_private_file_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    {
        let mut file = create_private_file(&tmp_path)?;
        file.write_all(contents)?;
        file.sync_all()?;
    }

    // A stale temp file from an earlier crash may carry wider permissions.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}
