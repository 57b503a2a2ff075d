//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::store::KeyListing;
use crate::vault::Descriptor;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of descriptors (Name, Description).
pub fn print_descriptors_table(descriptors: &[Descriptor]) {
    if descriptors.is_empty() {
        info("No described secrets in this namespace yet.");
        tip("Run `safekeeping set <KEY> --description <TEXT>` to add one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Description"]);

    for d in descriptors {
        table.add_row(vec![d.name.clone(), d.description.clone()]);
    }

    println!("{table}");
}

/// Print the keys a backend reports, one per line.
pub fn print_key_listing(listing: &KeyListing, backend: &str) {
    match listing {
        KeyListing::Unsupported => {
            warning(&format!("The {backend} backend cannot enumerate its keys."));
            tip("Secrets stored with a description are still shown by `safekeeping list`.");
        }
        KeyListing::Keys(keys) if keys.is_empty() => {
            info("No secrets in this namespace yet.");
        }
        KeyListing::Keys(keys) => {
            for key in keys {
                println!("{key}");
            }
        }
    }
}
