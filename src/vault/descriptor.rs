//! Descriptor: the `(name, description)` record attached to a secret.
//!
//! Descriptors live in the namespace's sidecar file, never with the secret
//! bytes. Only secrets stored through the description-aware path get one.

use serde::{Deserialize, Serialize};

/// Human-readable metadata about a stored secret (no secret value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// The key of the secret (e.g. "api_key").
    pub name: String,

    /// Free-form description, possibly empty.
    pub description: String,
}

impl Descriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
