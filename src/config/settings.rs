use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SafeKeepingError};
use crate::paths;
use crate::vault::VaultKind;

/// User-level configuration, loaded from `<config dir>/safekeeping/config.toml`.
///
/// Every field has a sensible default so SafeKeeping works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base directory to use instead of the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Which vault kind to use when none is specified.
    #[serde(default = "VaultKind::platform_default")]
    pub default_vault: VaultKind,

    /// Namespace to use when none is specified.
    #[serde(default = "default_namespace")]
    pub default_namespace: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_namespace() -> String {
    "default".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_vault: VaultKind::platform_default(),
            default_namespace: default_namespace(),
        }
    }
}

impl Settings {
    /// Name of the config file inside the config directory.
    const FILE_NAME: &'static str = "config.toml";

    /// Load settings from `<config_dir>/config.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::load_file(&config_dir.join(Self::FILE_NAME))
    }

    /// Load settings from an explicit file path.
    pub fn load_file(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SafeKeepingError::ConfigError(format!(
                "Failed to parse {}: {e}",
                config_path.display()
            ))
        })?;

        Ok(settings)
    }

    /// Load settings from the platform config directory
    /// (e.g. `~/.config/safekeeping/config.toml`), or defaults if there is
    /// no such directory.
    pub fn load_default() -> Result<Self> {
        match Self::default_config_dir() {
            Some(dir) => Self::load(&dir),
            None => Ok(Self::default()),
        }
    }

    /// The platform config directory for SafeKeeping, if one exists.
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(paths::APP_DIR))
    }

    /// The base directory vaults live under: the configured `data_dir`, or
    /// the platform per-user data directory.
    pub fn base_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => paths::default_base_dir(),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
