//! `safekeeping get` — print a single secret's value.

use std::io::{self, Write};

use zeroize::Zeroizing;

use crate::cli::{open_vault, Cli};
use crate::errors::{Result, SafeKeepingError};

/// Execute the `get` command.
pub fn execute(cli: &Cli, key: &str, no_newline: bool) -> Result<()> {
    let vault = open_vault(cli)?;

    let secret = vault
        .retrieve_secret(key)?
        .map(Zeroizing::new)
        .ok_or_else(|| SafeKeepingError::SecretNotFound(key.to_string()))?;

    // Write the raw bytes; secrets need not be UTF-8.
    let mut stdout = io::stdout().lock();
    stdout.write_all(&secret)?;
    if !no_newline {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;

    Ok(())
}
