//! Layout hashes - per-path change-detection entries.
//!
//! The host framework records, for every path it has updated, an integer
//! change-hash (a monotonically summed count of updates along the path and
//! its ancestors), the props that changed, and a render-type label. This
//! crate stores and reads those entries; how hashes are bumped or summed is
//! the host's business.

use std::collections::HashMap;
use std::collections::hash_map;

use serde::{Deserialize, Serialize};

use crate::path::LayoutPath;
use crate::tree::Props;

// =============================================================================
// Hash Entry
// =============================================================================

/// Change-detection record for a single layout path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HashEntry {
    /// Monotonic update counter; equal hashes mean nothing changed.
    pub hash: u64,
    /// Props that changed in the update that produced this hash.
    pub changed_props: Props,
    /// Host label classifying how the re-render should be performed.
    pub render_type: String,
}

impl HashEntry {
    /// Entry with the given hash, no changed props, empty render type.
    pub fn new(hash: u64) -> Self {
        Self {
            hash,
            ..Self::default()
        }
    }

    /// Builder-style changed-props assignment.
    pub fn with_changed_props(mut self, changed_props: Props) -> Self {
        self.changed_props = changed_props;
        self
    }

    /// Builder-style render-type assignment.
    pub fn with_render_type(mut self, render_type: impl Into<String>) -> Self {
        self.render_type = render_type.into();
        self
    }
}

// =============================================================================
// Layout Hashes Table
// =============================================================================

/// Table of [`HashEntry`] values keyed by stringified layout path.
///
/// Lifecycle and mutation belong to the host; this type is plumbing around
/// the map, keyed the same way [`LayoutPath::to_key`] stringifies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutHashes(HashMap<String, HashEntry>);

impl LayoutHashes {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up by pre-stringified key.
    pub fn get(&self, key: &str) -> Option<&HashEntry> {
        self.0.get(key)
    }

    /// Look up by path.
    pub fn for_path(&self, path: &LayoutPath) -> Option<&HashEntry> {
        self.0.get(&path.to_key())
    }

    /// Insert (or replace) the entry for a path.
    pub fn insert(&mut self, path: &LayoutPath, entry: HashEntry) -> Option<HashEntry> {
        self.0.insert(path.to_key(), entry)
    }

    /// Remove the entry for a path.
    pub fn remove(&mut self, path: &LayoutPath) -> Option<HashEntry> {
        self.0.remove(&path.to_key())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no path has an entry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterate over `(key, entry)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, HashEntry> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a LayoutHashes {
    type Item = (&'a String, &'a HashEntry);
    type IntoIter = hash_map::Iter<'a, String, HashEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
