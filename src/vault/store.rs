//! High-level vault: one namespace's backend plus its description index.
//!
//! `Vault` is what callers hold. Raw secret bytes go straight to the
//! backend; the description-aware entry point validates its input first and
//! only records a descriptor once the backend write has succeeded.

use std::path::{Path, PathBuf};

use crate::errors::{Result, SafeKeepingError};
use crate::paths;
use crate::store::{FileStore, KeyListing, SecretStore};
use crate::validate::{validate_description, validate_key};

use super::descriptor::Descriptor;
use super::index::DescriptionIndex;
use super::kind::VaultKind;

/// A namespace's complete secret storage.
pub struct Vault {
    namespace: String,
    kind: VaultKind,
    root: PathBuf,
    backend: Box<dyn SecretStore>,
    index: DescriptionIndex,
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("namespace", &self.namespace)
            .field("kind", &self.kind)
            .field("root", &self.root)
            .field("backend", &self.backend.backend_name())
            .finish_non_exhaustive()
    }
}

impl Vault {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Build the vault for `namespace` under an explicit base directory.
    ///
    /// The namespace root (`<base>/safekeeping/<namespace>`) is created
    /// owner-only if missing, and any existing sidecar is loaded so the new
    /// handle reflects prior state immediately.
    ///
    /// `NativeSecure` fails with `UnsupportedPlatform` when this build has
    /// no native backend for the current OS. There is no fallback to files.
    pub fn create(namespace: &str, kind: VaultKind, base_dir: &Path) -> Result<Self> {
        let root = paths::namespace_root(base_dir, namespace)?;

        let backend: Box<dyn SecretStore> = match kind {
            VaultKind::NativeSecure => native_backend(namespace)?,
            VaultKind::InsecureFile => Box::new(FileStore::open(&root)?),
        };

        Self::with_backend(namespace, kind, base_dir, backend)
    }

    /// Build the vault under the platform's per-user data directory.
    pub fn open_default(namespace: &str, kind: VaultKind) -> Result<Self> {
        Self::create(namespace, kind, &paths::default_base_dir()?)
    }

    /// Compose a vault from an already-built backend.
    pub fn with_backend(
        namespace: &str,
        kind: VaultKind,
        base_dir: &Path,
        backend: Box<dyn SecretStore>,
    ) -> Result<Self> {
        let root = paths::namespace_root(base_dir, namespace)?;
        paths::ensure_private_dir(&root)?;
        // The sidecar lives in the namespace root whatever the backend.
        let index = DescriptionIndex::load(&root.join(paths::INDEX_FILE))?;

        tracing::debug!(
            namespace,
            %kind,
            backend = backend.backend_name(),
            root = %root.display(),
            "opened vault"
        );

        Ok(Self {
            namespace: namespace.to_string(),
            kind,
            root,
            backend,
            index,
        })
    }

    // ------------------------------------------------------------------
    // Raw backend operations
    // ------------------------------------------------------------------

    /// Store a secret without a description.
    ///
    /// This is the low-level path: the key charset is not checked here and
    /// the secret never appears in [`Vault::list_secrets`].
    pub fn store_secret(&self, key: &str, secret: &[u8]) -> Result<()> {
        self.backend.store(key, secret)
    }

    /// Retrieve a secret. Absence is `Ok(None)`.
    pub fn retrieve_secret(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.backend.retrieve(key)
    }

    /// Remove a secret and any descriptor for it.
    ///
    /// Returns `true` only if the backend actually deleted something. A
    /// stale descriptor is evicted even when the secret was already gone.
    ///
    /// Once the backend has deleted the secret, a failure to evict its
    /// descriptor is logged rather than returned, so the caller still learns
    /// the secret is gone. The stale descriptor is evicted by a later
    /// `remove_secret` for the same key.
    pub fn remove_secret(&mut self, key: &str) -> Result<bool> {
        let removed = self.backend.remove(key)?;
        if let Err(e) = self.index.remove(key) {
            if !removed {
                return Err(e);
            }
            tracing::warn!(
                namespace = %self.namespace,
                key,
                error = %e,
                "secret removed but its descriptor could not be evicted"
            );
        }

        tracing::debug!(namespace = %self.namespace, key, removed, "remove secret");
        Ok(removed)
    }

    /// Enumerate the backend's keys, described or not.
    pub fn list_keys(&self) -> Result<KeyListing> {
        self.backend.list()
    }

    // ------------------------------------------------------------------
    // Description-aware operations
    // ------------------------------------------------------------------

    /// Validate, store the secret, then record its description.
    ///
    /// Invalid input is rejected before any I/O. If the backend write fails
    /// the index is left untouched, so there is never a descriptor for a
    /// secret that was not stored.
    pub fn store_secret_with_description(
        &mut self,
        key: &str,
        secret: &[u8],
        description: &str,
    ) -> Result<()> {
        validate_key(key)?;
        validate_description(description)?;

        self.backend.store(key, secret)?;
        self.index.add_or_replace(Descriptor::new(key, description))?;

        tracing::debug!(namespace = %self.namespace, key, "stored secret with description");
        Ok(())
    }

    /// Attach or replace the description of an existing secret.
    pub fn describe_secret(&mut self, key: &str, description: &str) -> Result<()> {
        validate_key(key)?;
        validate_description(description)?;

        if self.backend.retrieve(key)?.is_none() {
            return Err(SafeKeepingError::SecretNotFound(key.to_string()));
        }

        self.index.add_or_replace(Descriptor::new(key, description))
    }

    /// Add or replace a descriptor directly in the index.
    ///
    /// The descriptor is validated like [`Vault::store_secret_with_description`]
    /// input, but no secret has to exist for it.
    pub fn add_or_replace_descriptor(&mut self, descriptor: Descriptor) -> Result<()> {
        self.index.add_or_replace(descriptor)
    }

    /// Descriptors of secrets stored with a description, sorted by name.
    pub fn list_secrets(&self) -> &[Descriptor] {
        self.index.list()
    }

    /// The descriptor for `key`, if it was stored with a description.
    pub fn descriptor(&self, key: &str) -> Option<&Descriptor> {
        self.index.get(key)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the namespace name.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the vault kind.
    pub fn kind(&self) -> VaultKind {
        self.kind
    }

    /// Returns the namespace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the description sidecar file.
    pub fn index_path(&self) -> &Path {
        self.index.path()
    }

    /// Returns the backend's short name.
    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }
}

#[cfg(all(
    feature = "keyring-store",
    any(target_os = "linux", target_os = "macos", target_os = "windows")
))]
fn native_backend(namespace: &str) -> Result<Box<dyn SecretStore>> {
    Ok(Box::new(crate::store::keyring::KeyringStore::new(namespace)))
}

#[cfg(not(all(
    feature = "keyring-store",
    any(target_os = "linux", target_os = "macos", target_os = "windows")
)))]
fn native_backend(_namespace: &str) -> Result<Box<dyn SecretStore>> {
    Err(SafeKeepingError::UnsupportedPlatform)
}
