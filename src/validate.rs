//! Input validation for keys and descriptions.
//!
//! Both checks are pure and run before any I/O on the description-aware
//! write path. Nothing here is applied retroactively to stored data.

use crate::errors::{Result, SafeKeepingError};

/// Maximum length of a description, in bytes.
pub const MAX_DESCRIPTION_LEN: usize = 1024;

/// Characters a description may never contain. `\n` and `\r` would break
/// the line-oriented sidecar file; `/` is reserved.
const FORBIDDEN_DESCRIPTION_CHARS: [char; 4] = ['\n', '\r', '\0', '/'];

/// Validate that a key matches `^[A-Za-z0-9_-]+$`.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(SafeKeepingError::InvalidKey {
            key: String::new(),
            reason: "key cannot be empty".into(),
        });
    }

    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(SafeKeepingError::InvalidKey {
            key: key.to_string(),
            reason: format!(
                "character {bad:?} is not allowed — only ASCII letters, digits, underscores, and hyphens"
            ),
        });
    }

    Ok(())
}

/// Validate a human-readable description.
///
/// Empty descriptions are fine.
pub fn validate_description(description: &str) -> Result<()> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(SafeKeepingError::InvalidDescription(format!(
            "description is {} bytes, the limit is {MAX_DESCRIPTION_LEN}",
            description.len()
        )));
    }

    if let Some(bad) = description
        .chars()
        .find(|c| FORBIDDEN_DESCRIPTION_CHARS.contains(c))
    {
        return Err(SafeKeepingError::InvalidDescription(format!(
            "description cannot contain {bad:?}"
        )));
    }

    Ok(())
}
