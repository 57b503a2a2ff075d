//! Storage contract and backend implementations.
//!
//! Every backend is a flat implementer of [`SecretStore`]:
//! - `file`: one plaintext file per key under a namespace directory (insecure)
//! - `keyring`: the OS credential store (behind the `keyring-store` feature)
//!
//! Backends do not validate key format beyond what they need to stay safe;
//! the description-aware path in [`crate::vault::Vault`] does that.

pub mod file;

#[cfg(all(
    feature = "keyring-store",
    any(target_os = "linux", target_os = "macos", target_os = "windows")
))]
pub mod keyring;

pub use file::FileStore;

use crate::errors::Result;

/// Outcome of enumerating a backend's keys.
///
/// Some OS credential stores cannot enumerate entries, and "no secrets"
/// must not be confused with "cannot tell".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyListing {
    Keys(Vec<String>),
    Unsupported,
}

impl KeyListing {
    /// The listed keys, or `None` if the backend cannot enumerate.
    pub fn keys(&self) -> Option<&[String]> {
        match self {
            Self::Keys(keys) => Some(keys),
            Self::Unsupported => None,
        }
    }
}

/// Storage contract implemented by the file store and every native backend.
pub trait SecretStore: Send {
    /// Short name used in logs and CLI output.
    fn backend_name(&self) -> &'static str;

    /// Write or overwrite the secret for `key`.
    fn store(&self, key: &str, secret: &[u8]) -> Result<()>;

    /// Read the secret for `key`. Absence is `Ok(None)`, not an error.
    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Delete the secret for `key`; `Ok(true)` only if something was deleted.
    fn remove(&self, key: &str) -> Result<bool>;

    /// Enumerate stored keys, if the backend can.
    fn list(&self) -> Result<KeyListing>;
}
