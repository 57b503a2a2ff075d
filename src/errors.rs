use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in SafeKeeping.
#[derive(Debug, Error)]
pub enum SafeKeepingError {
    // --- Invalid input ---
    #[error("Invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Invalid description: {0}")]
    InvalidDescription(String),

    #[error("Invalid namespace '{name}': {reason}")]
    InvalidNamespace { name: String, reason: String },

    // --- Storage errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Secret '{0}' not found")]
    SecretNotFound(String),

    #[error("Cannot create private directory {path}: {source}")]
    PrivateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Platform errors ---
    #[error("Unsupported platform — no native secure storage is available in this build")]
    UnsupportedPlatform,

    #[error("Cannot determine the per-user data directory — set `data_dir` in the config")]
    NoDataDir,

    // --- Keyring errors ---
    #[error("Keyring error: {0}")]
    KeyringError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

impl SafeKeepingError {
    /// Returns `true` for malformed keys, descriptions and namespace names.
    ///
    /// These are raised before any I/O, so they never leave partial state.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidKey { .. } | Self::InvalidDescription(_) | Self::InvalidNamespace { .. }
        )
    }
}

/// Convenience type alias for SafeKeeping results.
pub type Result<T> = std::result::Result<T, SafeKeepingError>;
