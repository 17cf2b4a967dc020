// Reverse index from physical keys to the bindings they drive

use super::bindings::Key;
use std::collections::HashMap;

/// One binding that a key contributes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingIndexEntry {
    /// Action or axis name
    pub name: String,

    /// Player owning the binding
    pub player: usize,

    /// Whether the key drives the negative side of an axis (always false for actions)
    pub negative: bool,
}

impl BindingIndexEntry {
    pub fn new(name: impl Into<String>, player: usize, negative: bool) -> Self {
        Self {
            name: name.into(),
            player,
            negative,
        }
    }
}

/// Mapping from each key to the ordered list of entries it affects
#[derive(Debug, Clone, Default)]
pub struct ReverseIndex {
    buckets: HashMap<Key, Vec<BindingIndexEntry>>,
}

impl ReverseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the bucket for `key`
    pub fn insert(&mut self, key: Key, entry: BindingIndexEntry) {
        self.buckets.entry(key).or_default().push(entry);
    }

    /// Drop every entry owned by `player`, leaving other players untouched
    pub fn remove_player(&mut self, player: usize) {
        self.buckets.retain(|_, entries| {
            entries.retain(|entry| entry.player != player);
            !entries.is_empty()
        });
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Entries affected by `key`, in insertion order
    pub fn entries(&self, key: Key) -> &[BindingIndexEntry] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any key still points at `name` for `player`
    pub fn references(&self, player: usize, name: &str) -> bool {
        self.buckets
            .values()
            .flatten()
            .any(|entry| entry.player == player && entry.name == name)
    }

    /// Number of keys with at least one entry
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of entries across all keys
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
