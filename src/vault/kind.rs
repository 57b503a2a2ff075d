//! Which backend a vault stores its secret bytes in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SafeKeepingError};

/// The kind of vault to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VaultKind {
    /// The platform's native secret store. Never falls back to files.
    #[serde(alias = "native")]
    NativeSecure,

    /// Plaintext files under the user's data directory.
    #[serde(alias = "file")]
    InsecureFile,
}

impl VaultKind {
    /// Whether a native backend is compiled into this build for this OS.
    pub fn native_available() -> bool {
        cfg!(all(
            feature = "keyring-store",
            any(target_os = "linux", target_os = "macos", target_os = "windows")
        ))
    }

    /// `NativeSecure` when available, otherwise `InsecureFile`.
    pub fn platform_default() -> Self {
        if Self::native_available() {
            Self::NativeSecure
        } else {
            Self::InsecureFile
        }
    }
}

impl fmt::Display for VaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NativeSecure => f.write_str("native"),
            Self::InsecureFile => f.write_str("file"),
        }
    }
}

impl FromStr for VaultKind {
    type Err = SafeKeepingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "native" | "native-secure" => Ok(Self::NativeSecure),
            "file" | "insecure-file" => Ok(Self::InsecureFile),
            other => Err(SafeKeepingError::ConfigError(format!(
                "unknown vault kind '{other}' — supported: native, file"
            ))),
        }
    }
}
