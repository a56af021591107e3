//! Partial-match lookup over normalized keys.
//!
//! Keys are normalized strings; a lookup returns every key that contains the
//! query fragment as a substring. Values accumulate on key collision, so
//! several groups sharing a member name all stay reachable.

use std::collections::HashMap;

use super::normalize::normalize;

/// Ordered multimap from normalized key to values.
///
/// Keys keep insertion order and lookups report them in that order. Lookup is
/// a linear scan, which is fine for catalogs of tens to low thousands of
/// entries queried at typing speed.
#[derive(Debug, Clone)]
pub struct PartialMatchIndex<V> {
    entries: Vec<(String, Vec<V>)>,
    positions: HashMap<String, usize>,
}

impl<V> Default for PartialMatchIndex<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<V> PartialMatchIndex<V> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` under `key`. `key` must already be normalized.
    pub fn insert(&mut self, key: String, value: V) {
        match self.positions.get(&key) {
            Some(&pos) => self.entries[pos].1.push(value),
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![value]));
            }
        }
    }

    /// Every `(key, values)` pair whose key contains `fragment`.
    ///
    /// `fragment` must already be normalized. The empty fragment matches
    /// every key.
    pub fn get_all<'a>(
        &'a self,
        fragment: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [V])> + 'a {
        self.entries
            .iter()
            .filter(move |(key, _)| key.contains(fragment))
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Index `items` by the normalized form of `label(item)`.
pub fn build_label_index<T, V, L, F>(items: &[T], label: L, value: F) -> PartialMatchIndex<V>
where
    L: Fn(&T) -> &str,
    F: Fn(usize, &T) -> V,
{
    let mut index = PartialMatchIndex::new();
    for (pos, item) in items.iter().enumerate() {
        index.insert(normalize(label(item)), value(pos, item));
    }
    index
}

/// Index `items` once per member, by the normalized member name.
pub fn build_member_index<T, V, M, F>(items: &[T], members: M, value: F) -> PartialMatchIndex<V>
where
    M: Fn(&T) -> &[String],
    F: Fn(usize, &T) -> V,
{
    let mut index = PartialMatchIndex::new();
    for (pos, item) in items.iter().enumerate() {
        for name in members(item) {
            index.insert(normalize(name), value(pos, item));
        }
    }
    index
}

/// True iff any element of `list`, once normalized, contains `fragment`.
pub fn list_contains<S: AsRef<str>>(list: &[S], fragment: &str) -> bool {
    list.iter()
        .any(|entry| normalize(entry.as_ref()).contains(fragment))
}
