//! `safekeeping describe` — attach a description to an existing secret.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;

/// Execute the `describe` command.
pub fn execute(cli: &Cli, key: &str, description: &str) -> Result<()> {
    let mut vault = open_vault(cli)?;
    vault.describe_secret(key, description)?;

    output::success(&format!("Description of '{key}' saved"));
    Ok(())
}
