//! Sidecar file format for the description index.
//!
//! An `info.dat` file has one line per descriptor, sorted by name:
//!
//! ```text
//! api_key|API key for service X
//! key1|Login password
//! key2|
//! ```
//!
//! - The name ends at the first `|`; keys can never contain one.
//! - A missing segment after `|` is an empty description.
//! - Lines without a `|` are skipped.

use std::fs;
use std::io;
use std::path::Path;

use crate::errors::Result;
use crate::paths;

use super::descriptor::Descriptor;

/// Separator between name and description on a sidecar line.
const SEPARATOR: char = '|';

/// Parse sidecar text into descriptors, in file order.
pub fn parse_index(text: &str) -> Vec<Descriptor> {
    text.lines()
        .filter_map(|line| {
            let (name, description) = line.split_once(SEPARATOR)?;
            if name.is_empty() {
                return None;
            }
            Some(Descriptor::new(name, description))
        })
        .collect()
}

/// Render descriptors as sidecar text, one `name|description\n` per entry.
///
/// Callers are expected to pass a sorted, de-duplicated list.
pub fn render_index(descriptors: &[Descriptor]) -> String {
    let mut out = String::new();
    for d in descriptors {
        out.push_str(&d.name);
        out.push(SEPARATOR);
        out.push_str(&d.description);
        out.push('\n');
    }
    out
}

/// Read a sidecar file. A missing file is an empty index.
pub fn read_index(path: &Path) -> Result<Vec<Descriptor>> {
    match fs::read(path) {
        Ok(bytes) => Ok(parse_index(&String::from_utf8_lossy(&bytes))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

/// Rewrite a sidecar file in full, atomically, owner read/write only.
pub fn write_index(path: &Path, descriptors: &[Descriptor]) -> Result<()> {
    paths::write_private_file_atomic(path, render_index(descriptors).as_bytes())
}
