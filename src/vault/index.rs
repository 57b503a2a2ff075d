//! Description index: a sorted name→description list kept in a sidecar file.
//!
//! The index is independent of whichever backend holds the secret bytes.
//! Every mutation reloads the sidecar, applies the change in memory and
//! rewrites the whole file, so the on-disk list is always sorted by name
//! with no duplicates. The read-modify-write cycle is not locked: two
//! processes mutating the same namespace concurrently can lose an update.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::validate::{validate_description, validate_key};

use super::descriptor::Descriptor;
use super::format;

/// In-memory view of a namespace's `info.dat`.
#[derive(Debug)]
pub struct DescriptionIndex {
    path: PathBuf,
    descriptors: Vec<Descriptor>,
}

impl DescriptionIndex {
    /// Load the index from `path`. A missing file is an empty index.
    pub fn load(path: &Path) -> Result<Self> {
        let descriptors = normalize(format::read_index(path)?);
        tracing::debug!(
            path = %path.display(),
            count = descriptors.len(),
            "loaded description index"
        );
        Ok(Self {
            path: path.to_path_buf(),
            descriptors,
        })
    }

    /// Add a descriptor, or replace the one with the same name, and persist.
    ///
    /// The name and description are validated before the sidecar is read,
    /// so a malformed descriptor can never reach the file.
    pub fn add_or_replace(&mut self, descriptor: Descriptor) -> Result<()> {
        validate_key(&descriptor.name)?;
        validate_description(&descriptor.description)?;

        let mut descriptors = format::read_index(&self.path)?;
        descriptors.retain(|d| d.name != descriptor.name);
        descriptors.push(descriptor);
        let descriptors = normalize(descriptors);

        format::write_index(&self.path, &descriptors)?;
        self.descriptors = descriptors;
        Ok(())
    }

    /// Remove the descriptor named `name`, if present.
    ///
    /// When the index becomes empty the sidecar file is deleted rather than
    /// left behind as an empty file. Returns `true` if a descriptor was
    /// removed.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let mut descriptors = normalize(format::read_index(&self.path)?);
        let before = descriptors.len();
        descriptors.retain(|d| d.name != name);
        let removed = descriptors.len() != before;

        if removed {
            if descriptors.is_empty() {
                remove_if_exists(&self.path)?;
                tracing::debug!(path = %self.path.display(), "removed empty description index");
            } else {
                format::write_index(&self.path, &descriptors)?;
            }
        }

        self.descriptors = descriptors;
        Ok(removed)
    }

    /// The loaded descriptors, sorted by name.
    pub fn list(&self) -> &[Descriptor] {
        &self.descriptors
    }

    /// Look up a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.descriptors
            .binary_search_by(|d| d.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.descriptors[i])
    }

    /// Path of the sidecar file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Sort by name and drop duplicates, keeping the last occurrence.
fn normalize(descriptors: Vec<Descriptor>) -> Vec<Descriptor> {
    let map: BTreeMap<String, String> = descriptors
        .into_iter()
        .map(|d| (d.name, d.description))
        .collect();
    map.into_iter()
        .map(|(name, description)| Descriptor { name, description })
        .collect()
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
