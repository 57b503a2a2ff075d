//! `safekeeping path` — show where a namespace keeps its data.

use console::style;

use crate::cli::{open_vault, Cli};
use crate::errors::Result;

/// Execute the `path` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let vault = open_vault(cli)?;

    println!("{} {}", style("namespace:").bold(), vault.namespace());
    println!("{} {}", style("backend:  ").bold(), vault.backend_name());
    println!("{} {}", style("root:     ").bold(), vault.root().display());
    println!("{} {}", style("index:    ").bold(), vault.index_path().display());

    Ok(())
}
