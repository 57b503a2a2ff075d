//! Integration tests for file-backed vaults.

use std::fs;
use std::path::Path;

use safekeeping::{Descriptor, KeyListing, SafeKeepingError, Vault, VaultKind};
use tempfile::TempDir;

/// Helper: open an insecure-file vault under a fresh temp base dir.
fn file_vault(namespace: &str) -> (TempDir, Vault) {
    let dir = TempDir::new().expect("create temp dir");
    let vault = Vault::create(namespace, VaultKind::InsecureFile, dir.path()).expect("create vault");
    (dir, vault)
}

fn reopen(base: &Path, namespace: &str) -> Vault {
    Vault::create(namespace, VaultKind::InsecureFile, base).expect("reopen vault")
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[test]
fn creates_namespace_layout() {
    let (dir, vault) = file_vault("TestSafe");
    let root = dir.path().join("safekeeping").join("TestSafe");

    assert_eq!(vault.root(), root);
    assert!(root.join("storage").is_dir());
    assert_eq!(vault.index_path(), root.join("info.dat"));
    assert!(!vault.index_path().exists(), "sidecar is written lazily");
}

#[cfg(unix)]
#[test]
fn namespace_directories_are_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, _vault) = file_vault("TestSafe");
    let app = dir.path().join("safekeeping");

    for path in [app.clone(), app.join("TestSafe"), app.join("TestSafe/storage")] {
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o700, "{}", path.display());
    }
}

#[cfg(unix)]
#[test]
fn sidecar_is_owner_read_write_only() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, mut vault) = file_vault("TestSafe");
    vault
        .store_secret_with_description("api_key", b"SECRET_123", "API key")
        .unwrap();

    let mode = fs::metadata(vault.index_path()).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}

// ---------------------------------------------------------------------------
// Store / retrieve / remove
// ---------------------------------------------------------------------------

#[test]
fn store_and_retrieve_password() {
    let (_dir, vault) = file_vault("TestSafe");

    vault.store_secret("user_password", b"SuperSecret123!").unwrap();
    assert_eq!(
        vault.retrieve_secret("user_password").unwrap().as_deref(),
        Some(&b"SuperSecret123!"[..])
    );
}

#[test]
fn multiline_and_binary_secrets_roundtrip_exactly() {
    let (dir, vault) = file_vault("TestSafe");
    let pem = b"-----BEGIN CERTIFICATE-----\nMIIE7zCCAtcCFGBr8HLCF8m3FO8r8L6bW3Qsmq3x\n-----END CERTIFICATE-----\n";
    let binary = [0u8, 1, 2, 0, 255, b'\n', b'\r', 0];

    vault.store_secret("server_cert", pem).unwrap();
    vault.store_secret("blob", &binary).unwrap();
    vault.store_secret("empty", b"").unwrap();

    let vault = reopen(dir.path(), "TestSafe");
    assert_eq!(vault.retrieve_secret("server_cert").unwrap().unwrap(), pem);
    assert_eq!(vault.retrieve_secret("blob").unwrap().unwrap(), binary);
    assert_eq!(vault.retrieve_secret("empty").unwrap(), Some(Vec::new()));
}

#[test]
fn retrieve_missing_key_is_none() {
    let (_dir, vault) = file_vault("TestSafe");
    assert_eq!(vault.retrieve_secret("non_existent_key").unwrap(), None);
}

#[test]
fn remove_missing_key_is_false() {
    let (_dir, mut vault) = file_vault("TestSafe");

    assert!(!vault.remove_secret("non_existent_key").unwrap());
    assert_eq!(vault.retrieve_secret("non_existent_key").unwrap(), None);
}

#[test]
fn remove_existing_key_is_true() {
    let (_dir, mut vault) = file_vault("TestSafe");

    vault.store_secret("removable_secret", b"TemporaryValue").unwrap();
    assert!(vault.remove_secret("removable_secret").unwrap());
    assert_eq!(vault.retrieve_secret("removable_secret").unwrap(), None);
}

#[test]
fn overwrite_replaces_value() {
    let (_dir, vault) = file_vault("TestSafe");

    vault.store_secret("k", b"first value").unwrap();
    vault.store_secret("k", b"v2").unwrap();
    assert_eq!(vault.retrieve_secret("k").unwrap().unwrap(), b"v2");
}

#[test]
fn list_keys_includes_undescribed_secrets() {
    let (_dir, mut vault) = file_vault("TestSafe");

    vault.store_secret("raw", b"1").unwrap();
    vault
        .store_secret_with_description("described", b"2", "has a description")
        .unwrap();

    assert_eq!(
        vault.list_keys().unwrap(),
        KeyListing::Keys(vec!["described".into(), "raw".into()])
    );
}

// ---------------------------------------------------------------------------
// Descriptions
// ---------------------------------------------------------------------------

#[test]
fn store_with_description_then_list() {
    let (_dir, mut vault) = file_vault("TestSafe");

    vault
        .store_secret_with_description("api_key", b"SECRET_123", "API key for service X")
        .unwrap();

    assert_eq!(
        vault.retrieve_secret("api_key").unwrap().as_deref(),
        Some(&b"SECRET_123"[..])
    );
    assert_eq!(
        vault.list_secrets(),
        [Descriptor::new("api_key", "API key for service X")]
    );
}

#[test]
fn list_is_sorted_by_name() {
    let (_dir, mut vault) = file_vault("TestSafe");

    vault
        .store_secret_with_description("key2", b"myToken456", "API token")
        .unwrap();
    vault
        .store_secret_with_description("key1", b"password123", "Login password")
        .unwrap();

    let list = vault.list_secrets();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0], Descriptor::new("key1", "Login password"));
    assert_eq!(list[1], Descriptor::new("key2", "API token"));
}

#[test]
fn list_only_shows_described_secrets() {
    let (_dir, mut vault) = file_vault("TestSafe");

    vault
        .store_secret_with_description("described_key", b"SecretWithDesc", "A described secret")
        .unwrap();
    vault.store_secret("undisclosed_key", b"SecretWithoutDesc").unwrap();

    assert_eq!(
        vault.list_secrets(),
        [Descriptor::new("described_key", "A described secret")]
    );
}

#[test]
fn redescribing_replaces_without_duplicates() {
    let (_dir, mut vault) = file_vault("TestSafe");

    vault.store_secret_with_description("k", b"v1", "first").unwrap();
    vault.store_secret_with_description("k", b"v2", "second").unwrap();

    assert_eq!(vault.list_secrets(), [Descriptor::new("k", "second")]);
    assert_eq!(vault.retrieve_secret("k").unwrap().unwrap(), b"v2");
}

#[test]
fn invalid_key_is_rejected_before_backend() {
    let (_dir, mut vault) = file_vault("TestSafe");

    let err = vault
        .store_secret_with_description("bad key", b"v", "desc")
        .unwrap_err();
    assert!(matches!(err, SafeKeepingError::InvalidKey { .. }));
    assert!(err.is_invalid_input());

    assert_eq!(vault.list_keys().unwrap(), KeyListing::Keys(Vec::new()));
    assert!(vault.list_secrets().is_empty());
}

#[test]
fn invalid_description_is_rejected_before_backend() {
    let (_dir, mut vault) = file_vault("TestSafe");

    let long = "d".repeat(1025);
    for desc in [long.as_str(), "a\nb", "a\rb", "a\0b", "path/like"] {
        let err = vault
            .store_secret_with_description("key", b"v", desc)
            .unwrap_err();
        assert!(matches!(err, SafeKeepingError::InvalidDescription(_)));
    }
    assert_eq!(vault.retrieve_secret("key").unwrap(), None);
}

#[test]
fn direct_descriptor_with_newline_cannot_corrupt_index() {
    let (dir, mut vault) = file_vault("TestSafe");

    let err = vault
        .add_or_replace_descriptor(Descriptor::new("a", "x\nphantom|injected"))
        .unwrap_err();
    assert!(matches!(err, SafeKeepingError::InvalidDescription(_)));
    assert!(!vault.index_path().exists());

    let reloaded = reopen(dir.path(), "TestSafe");
    assert!(reloaded.list_secrets().is_empty());
}

#[test]
fn empty_description_is_listed() {
    let (dir, mut vault) = file_vault("TestSafe");

    vault.store_secret_with_description("quiet", b"v", "").unwrap();
    assert_eq!(
        fs::read_to_string(vault.index_path()).unwrap(),
        "quiet|\n"
    );

    let vault = reopen(dir.path(), "TestSafe");
    assert_eq!(vault.list_secrets(), [Descriptor::new("quiet", "")]);
}

#[test]
fn removing_described_secret_clears_listing_and_sidecar() {
    let (_dir, mut vault) = file_vault("TestSafe");

    vault
        .store_secret_with_description("key1", b"TemporarySecret", "Temporary Description")
        .unwrap();
    assert!(vault.index_path().exists());

    assert!(vault.remove_secret("key1").unwrap());
    assert_eq!(vault.retrieve_secret("key1").unwrap(), None);
    assert!(vault.list_secrets().is_empty());
    assert!(!vault.index_path().exists());
}

#[test]
fn removing_one_of_two_keeps_the_other() {
    let (_dir, mut vault) = file_vault("TestSafe");

    vault.store_secret_with_description("a", b"1", "first").unwrap();
    vault.store_secret_with_description("b", b"2", "second").unwrap();
    assert!(vault.remove_secret("a").unwrap());

    assert_eq!(vault.list_secrets(), [Descriptor::new("b", "second")]);
    assert_eq!(fs::read_to_string(vault.index_path()).unwrap(), "b|second\n");
}

#[test]
fn reopened_vault_sees_prior_descriptions() {
    let (dir, mut vault) = file_vault("TestSafe");
    vault
        .store_secret_with_description("api_key", b"SECRET_123", "API key for service X")
        .unwrap();
    drop(vault);

    let vault = reopen(dir.path(), "TestSafe");
    assert_eq!(
        vault.descriptor("api_key"),
        Some(&Descriptor::new("api_key", "API key for service X"))
    );
}

#[test]
fn hand_edited_sidecar_is_tolerated() {
    let (dir, vault) = file_vault("TestSafe");
    fs::write(
        vault.index_path(),
        "zeta|last\nthis line has no separator\nalpha|old\nalpha|new\n",
    )
    .unwrap();

    let vault = reopen(dir.path(), "TestSafe");
    assert_eq!(
        vault.list_secrets(),
        [
            Descriptor::new("alpha", "new"),
            Descriptor::new("zeta", "last"),
        ]
    );
}

// ---------------------------------------------------------------------------
// Namespaces and factory
// ---------------------------------------------------------------------------

#[test]
fn namespaces_are_isolated() {
    let dir = TempDir::new().unwrap();

    {
        let mut v1 = reopen(dir.path(), "Namespace1");
        v1.store_secret_with_description("shared_key", b"Vault1_Secret", "one")
            .unwrap();
    }
    {
        let v2 = reopen(dir.path(), "Namespace2");
        v2.store_secret("shared_key", b"Vault2_Secret").unwrap();
    }

    let v1 = reopen(dir.path(), "Namespace1");
    let v2 = reopen(dir.path(), "Namespace2");
    assert_eq!(
        v1.retrieve_secret("shared_key").unwrap().unwrap(),
        b"Vault1_Secret"
    );
    assert_eq!(
        v2.retrieve_secret("shared_key").unwrap().unwrap(),
        b"Vault2_Secret"
    );
    assert_eq!(v1.list_secrets().len(), 1);
    assert!(v2.list_secrets().is_empty());
}

#[test]
fn unsafe_namespace_is_rejected() {
    let dir = TempDir::new().unwrap();
    let err = Vault::create("../escape", VaultKind::InsecureFile, dir.path()).unwrap_err();
    assert!(matches!(err, SafeKeepingError::InvalidNamespace { .. }));
}

#[cfg(not(feature = "keyring-store"))]
#[test]
fn native_vault_without_backend_fails_without_fallback() {
    let dir = TempDir::new().unwrap();
    let err = Vault::create("TestSafe", VaultKind::NativeSecure, dir.path()).unwrap_err();

    assert!(matches!(err, SafeKeepingError::UnsupportedPlatform));
    assert!(!dir.path().join("safekeeping").exists());
}

#[test]
fn vault_reports_its_identity() {
    let (_dir, vault) = file_vault("TestSafe");
    assert_eq!(vault.namespace(), "TestSafe");
    assert_eq!(vault.kind(), VaultKind::InsecureFile);
    assert_eq!(vault.backend_name(), "file");
}
