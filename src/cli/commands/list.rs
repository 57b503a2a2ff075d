//! `safekeeping list` — display described secrets in a table.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{Result, SafeKeepingError};

/// Execute the `list` command.
pub fn execute(cli: &Cli, json: bool) -> Result<()> {
    let vault = open_vault(cli)?;
    let descriptors = vault.list_secrets();

    if json {
        let out = serde_json::to_string_pretty(descriptors)
            .map_err(|e| SafeKeepingError::SerializationError(e.to_string()))?;
        println!("{out}");
        return Ok(());
    }

    output::info(&format!(
        "{} namespace — {} described secret(s)",
        vault.namespace(),
        descriptors.len()
    ));
    output::print_descriptors_table(descriptors);

    Ok(())
}
