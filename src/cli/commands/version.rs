//! `safekeeping version` — display version and available backends.

use console::style;

use crate::errors::Result;
use crate::vault::VaultKind;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    println!("safekeeping {}", env!("CARGO_PKG_VERSION"));

    if VaultKind::native_available() {
        println!("{}", style("Native keyring backend: available").green());
    } else {
        println!(
            "{}",
            style("Native keyring backend: not built (enable the `keyring-store` feature)").yellow()
        );
    }
    println!("Default vault: {}", VaultKind::platform_default());

    Ok(())
}
