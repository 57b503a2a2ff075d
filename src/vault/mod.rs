//! Vault module — a namespace's backend composed with its description index.
//!
//! This module provides:
//! - `Descriptor`, the per-secret description record (`descriptor`)
//! - The `info.dat` sidecar format (`format`)
//! - `DescriptionIndex`, the sorted sidecar-backed index (`index`)
//! - `VaultKind`, native vs. file backend selection (`kind`)
//! - `Vault`, the composed object callers hold (`store`)

pub mod descriptor;
pub mod format;
pub mod index;
pub mod kind;
pub mod store;

// Re-export the most commonly used items.
pub use descriptor::Descriptor;
pub use index::DescriptionIndex;
pub use kind::VaultKind;
pub use store::Vault;
