//! `safekeeping keys` — list every key the backend can enumerate.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;

/// Execute the `keys` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let vault = open_vault(cli)?;
    let listing = vault.list_keys()?;
    output::print_key_listing(&listing, vault.backend_name());
    Ok(())
}
