//! The flat settings snapshot handed to analytics pipelines

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A point-in-time mapping of capability (and optionally summary) keys to
/// rendered string values.
///
/// Backed by a `BTreeMap`, so iteration is key-sorted; callers that want a
/// display ordering get it for free, but nothing downstream relies on it.
/// Constructed fresh per snapshot call, read once, discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsSnapshot {
    entries: BTreeMap<String, String>,
}

impl SettingsSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one entry, returning the previous value for the key if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up the rendered value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the snapshot contains an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key-sorted iteration over entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consume the snapshot, yielding the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.entries
    }
}

impl IntoIterator for SettingsSnapshot {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, String)> for SettingsSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
