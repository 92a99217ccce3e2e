//! Cache Trait Module
//!
//! The operation set shared by every LRU store, and the seam the
//! thread-safe wrapper is generic over.

use std::borrow::Borrow;
use std::hash::Hash;

use crate::cache::CacheStats;
use crate::error::Result;

// == LRU Cache Trait ==
/// Operations of a bounded, recency-ordered key/value store.
///
/// Every method that can touch recency takes `&mut self`, so an
/// implementation on its own is not safe to share between threads. Wrap
/// it in [`SyncCache`](crate::cache::SyncCache) for concurrent use.
pub trait LruCache {
    type Key: Hash + Eq;
    type Value;

    /// Stores or overwrites a pair and marks it most recently used.
    ///
    /// Evicts the least recently used entry first when a new key arrives
    /// at full capacity. Never fails.
    fn insert(&mut self, key: Self::Key, value: Self::Value);

    /// Returns the value for `key` and promotes it to most recently used.
    ///
    /// Fails with [`CacheError::NotFound`](crate::error::CacheError::NotFound)
    /// when the key is absent.
    fn lookup<Q>(&mut self, key: &Q) -> Result<&Self::Value>
    where
        Self::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Reports whether `key` is cached.
    ///
    /// This is a lookup with `NotFound` mapped to `false`, so a `true`
    /// result also promotes the entry to most recently used and counts as
    /// a hit. Callers that only want to inspect membership should expect
    /// the recency order to change.
    fn contains<Q>(&mut self, key: &Q) -> bool
    where
        Self::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup(key).is_ok()
    }

    /// Removes `key`, returning its value. Not counted as an eviction.
    fn remove<Q>(&mut self, key: &Q) -> Result<Self::Value>
    where
        Self::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Drops every entry and resets statistics. Capacity is unchanged.
    fn clear(&mut self);

    /// Snapshot of the current statistics.
    fn stats(&self) -> CacheStats;

    fn capacity(&self) -> usize;

    fn size(&self) -> usize;
}
