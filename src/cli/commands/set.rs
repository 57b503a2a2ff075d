//! `safekeeping set` — add or overwrite a secret.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{open_vault, read_secret_value, Cli};
use crate::errors::Result;
use crate::validate::{validate_description, validate_key};

/// Execute the `set` command.
pub fn execute(cli: &Cli, key: &str, value: Option<&str>, description: Option<&str>) -> Result<()> {
    // Reject bad input before prompting for a value.
    validate_key(key)?;
    if let Some(desc) = description {
        validate_description(desc)?;
    }

    let secret = read_secret_value(key, value)?;
    let mut vault = open_vault(cli)?;
    let existed = vault.retrieve_secret(key)?.map(Zeroizing::new).is_some();

    match description {
        Some(desc) => vault.store_secret_with_description(key, &secret, desc)?,
        None => vault.store_secret(key, &secret)?,
    }

    let verb = if existed { "updated" } else { "added" };
    output::success(&format!(
        "Secret '{key}' {verb} in namespace '{}' ({} backend)",
        vault.namespace(),
        vault.backend_name()
    ));

    if description.is_none() && vault.descriptor(key).is_none() {
        output::tip("Add --description to have this secret shown by `safekeeping list`.");
    }

    Ok(())
}
