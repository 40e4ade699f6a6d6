//! Insertion-ordered grouping of registered entries.

use std::collections::HashMap;
use std::hash::Hash;

/// Returns the object id of a plot or video id: everything before the first
/// `_`, or the whole id if there is none.
///
/// ```
/// use visualize3d_site::derive_object_id;
///
/// assert_eq!(derive_object_id("7_articulation2"), "7");
/// assert_eq!(derive_object_id("42"), "42");
/// ```
pub fn derive_object_id(id: &str) -> &str {
    id.split_once('_').map_or(id, |(head, _)| head)
}

/// A multi-map that remembers the order in which keys were first seen and
/// the order of values under each key.
#[derive(Debug, Clone)]
pub struct OrderedMultiMap<K, V> {
    entries: Vec<(K, Vec<V>)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for OrderedMultiMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq + Clone, V> OrderedMultiMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` under `key`.
    pub fn push(&mut self, key: K, value: V) {
        if let Some(&i) = self.index.get(&key) {
            self.entries[i].1.push(value);
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, vec![value]));
        }
    }

    /// Returns the values under `key`, in insertion order.
    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.index.get(key).map(|&i| self.entries[i].1.as_slice())
    }

    /// Returns true if `key` has at least one value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Iterates over keys and their values in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Iterates over keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Partitions `items` by object id, preserving order within each group.
pub fn group_by_object<'a, T>(
    items: &'a [T],
    id_of: impl Fn(&T) -> &str,
) -> OrderedMultiMap<&'a str, &'a T> {
    let mut groups = OrderedMultiMap::new();
    for item in items {
        groups.push(derive_object_id(id_of(item)), item);
    }
    groups
}
