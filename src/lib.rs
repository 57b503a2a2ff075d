//! SafeKeeping — per-application secret storage.
//!
//! Secrets are opaque bytes addressed by short keys inside an isolated
//! namespace. A vault stores them either in the OS-native secure store or,
//! as an explicitly insecure fallback, in plaintext files under the user's
//! data directory. Any vault can attach a human-readable description to a
//! secret; descriptions are kept in a sorted sidecar index.
//!
//! ```no_run
//! use safekeeping::{Vault, VaultKind};
//!
//! # fn main() -> safekeeping::Result<()> {
//! let mut vault = Vault::open_default("MyApp", VaultKind::InsecureFile)?;
//! vault.store_secret_with_description("api_key", b"SECRET_123", "API key for service X")?;
//! assert_eq!(vault.retrieve_secret("api_key")?.as_deref(), Some(&b"SECRET_123"[..]));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod paths;
pub mod store;
pub mod validate;
pub mod vault;

pub use errors::{Result, SafeKeepingError};
pub use store::{KeyListing, SecretStore};
pub use vault::{Descriptor, Vault, VaultKind};
