//! `safekeeping delete` — remove a secret and its description.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{Result, SafeKeepingError};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, key: &str, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete secret '{key}'?"))
            .default(false)
            .interact()
            .map_err(|e| SafeKeepingError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let mut vault = open_vault(cli)?;

    if vault.remove_secret(key)? {
        output::success(&format!("Deleted secret '{key}'"));
        Ok(())
    } else {
        Err(SafeKeepingError::SecretNotFound(key.to_string()))
    }
}
