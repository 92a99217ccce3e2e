//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with an O(1) recency list.
//!
//! Not thread-safe: recency-mutating calls need `&mut self`. Use
//! [`SyncCache`](crate::cache::SyncCache) to share a store between threads.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::cache::{CacheStats, Entry, LruCache, NodeId, RecencyList, DEFAULT_CACHE_SIZE};
use crate::error::{CacheError, Result};

/// Upper bound on slots reserved at construction; larger stores grow on demand.
const MAX_PREALLOCATED: usize = 1024;

// == Cache Store ==
/// Bounded key/value store with strict least-recently-used eviction.
pub struct LruStore<K, V> {
    /// Key to recency list node
    index: HashMap<K, NodeId>,
    /// Entries ordered MRU (front) to LRU (back)
    order: RecencyList<Entry<K, V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> LruStore<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns `InvalidArgument` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidArgument(
                "cache capacity must be at least 1".to_string(),
            ));
        }

        Ok(Self::with_nonzero_capacity(capacity))
    }

    fn with_nonzero_capacity(capacity: usize) -> Self {
        let reserved = capacity.min(MAX_PREALLOCATED);
        debug!(capacity, reserved, "LRU store created");
        Self {
            index: HashMap::with_capacity(reserved),
            order: RecencyList::with_capacity(reserved),
            stats: CacheStats::new(capacity),
            capacity,
        }
    }

    // == Insert ==
    /// Stores a key-value pair and marks it most recently used.
    ///
    /// If the key already exists its value is replaced and nothing is
    /// evicted. If the key is new and the store is full, the least recently
    /// used entry is evicted first.
    pub fn insert(&mut self, key: K, value: V) {
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(id) {
                entry.value = value;
            }
            self.order.move_to_front(id);
            return;
        }

        if self.index.len() >= self.capacity {
            self.evict_lru();
        }

        let id = self.order.push_front(Entry::new(key.clone(), value));
        self.index.insert(key, id);
    }

    // == Lookup ==
    /// Retrieves a value by key, promoting it to most recently used.
    ///
    /// # Errors
    /// Returns `NotFound` when the key is absent.
    pub fn lookup<Q>(&mut self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&id) = self.index.get(key) else {
            self.stats.record_miss();
            return Err(CacheError::NotFound);
        };

        self.stats.record_hit();
        self.order.move_to_front(id);
        self.order
            .get(id)
            .map(|entry| &entry.value)
            .ok_or(CacheError::NotFound)
    }

    // == Contains ==
    /// Reports whether the key is cached.
    ///
    /// Defined as a lookup whose `NotFound` becomes `false`. A hit
    /// therefore promotes the entry to most recently used, exactly like
    /// [`lookup`](Self::lookup), and is recorded in the statistics. Use
    /// [`peek`](Self::peek) to inspect without touching recency.
    pub fn contains<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup(key).is_ok()
    }

    // == Peek ==
    /// Returns the value without promoting it or recording a hit.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = *self.index.get(key)?;
        self.order.get(id).map(|entry| &entry.value)
    }

    // == Remove ==
    /// Removes an entry by key and returns its value.
    ///
    /// # Errors
    /// Returns `NotFound` when the key is absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.index.remove(key).ok_or(CacheError::NotFound)?;
        self.order
            .remove(id)
            .map(|entry| entry.value)
            .ok_or(CacheError::NotFound)
    }

    // == Clear ==
    /// Removes every entry and resets the statistics.
    pub fn clear(&mut self) {
        let dropped = self.index.len();
        self.index.clear();
        self.order.clear();
        self.stats.reset();
        debug!(dropped, "LRU store cleared");
    }

    // == Keys ==
    /// Iterates keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter().map(|entry| &entry.key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_size(self.index.len());
        stats
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current number of entries.
    pub fn size(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn evict_lru(&mut self) {
        if let Some(entry) = self.order.pop_back() {
            let (key, _value) = entry.into_pair();
            self.index.remove(&key);
            self.stats.record_eviction();
            trace!(size = self.index.len(), "evicted least recently used entry");
        }
    }
}

impl<K, V> Default for LruStore<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Creates a store with [`DEFAULT_CACHE_SIZE`] capacity.
    fn default() -> Self {
        Self::with_nonzero_capacity(DEFAULT_CACHE_SIZE)
    }
}

impl<K, V> LruCache for LruStore<K, V>
where
    K: Hash + Eq + Clone,
{
    type Key = K;
    type Value = V;

    fn insert(&mut self, key: K, value: V) {
        LruStore::insert(self, key, value)
    }

    fn lookup<Q>(&mut self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        LruStore::lookup(self, key)
    }

    fn contains<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        LruStore::contains(self, key)
    }

    fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        LruStore::remove(self, key)
    }

    fn clear(&mut self) {
        LruStore::clear(self)
    }

    fn stats(&self) -> CacheStats {
        LruStore::stats(self)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn size(&self) -> usize {
        self.index.len()
    }
}

impl<K, V> fmt::Debug for LruStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruStore")
            .field("size", &self.index.len())
            .field("capacity", &self.capacity)
            .field("stats", &self.stats)
            .finish()
    }
}
