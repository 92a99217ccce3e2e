//! Cache Entry Module
//!
//! Defines the pair stored in each recency list node.

// == Cache Entry ==
/// A single key/value pair held by the store.
///
/// The key is kept alongside the value so an eviction from the tail of the
/// recency list can remove the matching index entry.
#[derive(Debug)]
pub struct Entry<K, V> {
    /// The lookup key
    pub key: K,
    /// The stored value, never inspected by the cache
    pub value: V,
}

impl<K, V> Entry<K, V> {
    // == Constructor ==
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the entry into its key and value.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
