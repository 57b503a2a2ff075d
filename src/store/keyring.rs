//! OS keyring backend.
//!
//! Stores secrets in the operating system's secure credential store:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: the freedesktop Secret Service (GNOME Keyring, KWallet), which
//!   persists across reboots
//!
//! Each namespace gets its own keyring service name, so two namespaces never
//! share entries. None of these stores can enumerate entries for us, so
//! `list` always reports [`KeyListing::Unsupported`].

use ::keyring::Entry;

use crate::errors::{Result, SafeKeepingError};

use super::{KeyListing, SecretStore};

/// Build the keyring service name for a namespace.
fn service_name(namespace: &str) -> String {
    format!("safekeeping:{namespace}")
}

/// Secret store backed by the OS keyring.
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub fn new(namespace: &str) -> Self {
        Self {
            service: service_name(namespace),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry> {
        Entry::new(&self.service, key).map_err(|e| {
            SafeKeepingError::KeyringError(format!("failed to create keyring entry: {e}"))
        })
    }
}

impl SecretStore for KeyringStore {
    fn backend_name(&self) -> &'static str {
        "keyring"
    }

    fn store(&self, key: &str, secret: &[u8]) -> Result<()> {
        self.entry(key)?.set_secret(secret).map_err(|e| {
            SafeKeepingError::KeyringError(format!("failed to store secret in keyring: {e}"))
        })?;

        tracing::debug!(service = %self.service, key, "stored secret in keyring");
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.entry(key)?.get_secret() {
            Ok(secret) => Ok(Some(secret)),
            Err(::keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(SafeKeepingError::KeyringError(format!(
                "failed to read from keyring: {e}"
            ))),
        }
    }

    fn remove(&self, key: &str) -> Result<bool> {
        match self.entry(key)?.delete_credential() {
            Ok(()) => {
                tracing::debug!(service = %self.service, key, "removed secret from keyring");
                Ok(true)
            }
            Err(::keyring::Error::NoEntry) => Ok(false),
            Err(e) => Err(SafeKeepingError::KeyringError(format!(
                "failed to delete from keyring: {e}"
            ))),
        }
    }

    fn list(&self) -> Result<KeyListing> {
        Ok(KeyListing::Unsupported)
    }
}
