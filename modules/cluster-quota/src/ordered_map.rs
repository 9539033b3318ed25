//! A small map tracking key insertion order.
//!
//! Keys iterate in the order they were first inserted, which gives the
//! owning status object a stable serialization. Removal is a linear scan
//! of the order sequence; partition counts are bounded by active
//! namespaces, expected in the tens.

use std::collections::HashMap;

/// Insertion-ordered map from partition key to a status value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: HashMap<String, V>,
    order: Vec<String>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OrderedMap<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Sets the value for `key`, appending new keys to the order.
    ///
    /// Keys are ordered by first insertion, not last touch: overwriting an
    /// existing key keeps its position. A key re-inserted after removal
    /// counts as a new insertion and goes to the end, so the order tracks
    /// still-present insertion recency rather than historical position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.entries.insert(key, value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Removes `key` from both the map and the order sequence.
    ///
    /// Removing an absent key is a no-op and returns `None`.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let removed = self.entries.remove(key)?;
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
        Some(removed)
    }

    /// Returns the current keys in first-insertion order.
    ///
    /// Each call produces a fresh owned snapshot; later mutations of the
    /// map do not affect snapshots already handed out.
    #[must_use]
    pub fn ordered_keys(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Iterates entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.order
            .iter()
            .filter_map(|k| self.entries.get(k).map(|v| (k.as_str(), v)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
