//! Thread-Safe Cache Module
//!
//! Serializes every operation on an inner [`LruCache`] behind a single
//! mutex. Each call is atomic with respect to every other call; sequences
//! of calls are not.
//!
//! `parking_lot::Mutex` is used because every lookup reorders the recency
//! list, so there is no read-only path a `RwLock` could share. The guard is
//! dropped on every return path, `NotFound` included, and the lock does not
//! poison if a caller panics.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::cache::{CacheStats, LruCache, LruStore};
use crate::error::Result;

// == Sync Cache ==
/// Thread-safe wrapper around any [`LruCache`] implementation.
///
/// The wrapped store is moved in at construction and is reachable only
/// through this type, so no caller can bypass the lock.
pub struct SyncCache<C> {
    inner: Mutex<C>,
}

/// Thread-safe LRU cache backed by [`LruStore`].
pub type ThreadSafeLruCache<K, V> = SyncCache<LruStore<K, V>>;

impl<C: LruCache> SyncCache<C> {
    // == Constructor ==
    /// Wraps an existing store.
    pub fn new(cache: C) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    // == Insert ==
    /// Stores or overwrites a pair under the lock.
    pub fn insert(&self, key: C::Key, value: C::Value) {
        self.inner.lock().insert(key, value);
    }

    // == Lookup ==
    /// Returns a clone of the value for `key`, promoting it to most
    /// recently used.
    ///
    /// # Errors
    /// Returns `NotFound` when the key is absent.
    pub fn lookup<Q>(&self, key: &Q) -> Result<C::Value>
    where
        C::Key: Borrow<Q>,
        C::Value: Clone,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().lookup(key).cloned()
    }

    /// Runs `f` on the value for `key` while the lock is held.
    ///
    /// Promotes the entry like [`lookup`](Self::lookup) without requiring
    /// `Clone`. `f` must not call back into this cache.
    pub fn lookup_with<Q, R>(&self, key: &Q, f: impl FnOnce(&C::Value) -> R) -> Result<R>
    where
        C::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().lookup(key).map(f)
    }

    // == Contains ==
    /// Reports whether `key` is cached.
    ///
    /// Same contract as [`LruCache::contains`]: a `true` result promotes the
    /// entry to most recently used.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        C::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().contains(key)
    }

    // == Remove ==
    pub fn remove<Q>(&self, key: &Q) -> Result<C::Value>
    where
        C::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().remove(key)
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    /// Consumes the wrapper and returns the store.
    pub fn into_inner(self) -> C {
        self.inner.into_inner()
    }
}

impl<K, V> SyncCache<LruStore<K, V>>
where
    K: Hash + Eq + Clone,
{
    /// Creates a thread-safe cache around a new [`LruStore`].
    ///
    /// # Errors
    /// Returns `InvalidArgument` when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        LruStore::new(capacity).map(Self::new)
    }
}

impl<C: LruCache + Default> Default for SyncCache<C> {
    /// Wraps a default store; for [`ThreadSafeLruCache`] that holds
    /// [`DEFAULT_CACHE_SIZE`](crate::cache::DEFAULT_CACHE_SIZE) entries.
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: fmt::Debug> fmt::Debug for SyncCache<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(guard) => f.debug_struct("SyncCache").field("inner", &*guard).finish(),
            None => f.debug_struct("SyncCache").field("inner", &"<locked>").finish(),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use std::sync::Arc;
    use std::thread;

    fn filled(entries: &[(&'static str, i32)]) -> ThreadSafeLruCache<&'static str, i32> {
        let cache = SyncCache::with_capacity(entries.len()).unwrap();
        for &(key, value) in entries {
            cache.insert(key, value);
        }
        cache
    }

    #[test]
    fn test_sync_zero_capacity_rejected() {
        let result = ThreadSafeLruCache::<String, i32>::with_capacity(0);
        assert!(matches!(result, Err(CacheError::InvalidArgument(_))));
    }

    #[test]
    fn test_sync_huge_capacity_allocates_lazily() {
        let cache = ThreadSafeLruCache::with_capacity(usize::MAX / 2).unwrap();

        cache.insert(1u64, 1u64);
        cache.insert(2, 2);

        assert_eq!(cache.size(), 2);
        assert_eq!(cache.lookup(&2), Ok(2));
    }

    #[test]
    fn test_sync_default_capacity() {
        let cache: ThreadSafeLruCache<String, u8> = SyncCache::default();
        assert_eq!(cache.capacity(), crate::cache::DEFAULT_CACHE_SIZE);
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn test_sync_insert_lookup() {
        let cache = ThreadSafeLruCache::with_capacity(10).unwrap();

        cache.insert("key".to_string(), vec![1, 2, 3]);

        assert_eq!(cache.lookup("key"), Ok(vec![1, 2, 3]));
        assert_eq!(cache.lookup("missing"), Err(CacheError::NotFound));
        assert_eq!(cache.size(), 1);
        assert_eq!(cache.capacity(), 10);
    }

    #[test]
    fn test_sync_lookup_with() {
        let cache = ThreadSafeLruCache::with_capacity(2).unwrap();
        cache.insert(1u32, String::from("hello"));

        assert_eq!(cache.lookup_with(&1, |v| v.len()), Ok(5));
        assert_eq!(cache.lookup_with(&2, |v| v.len()), Err(CacheError::NotFound));
    }

    #[test]
    fn test_sync_read_promotes() {
        let cache = filled(&[("a", 1), ("b", 2), ("c", 3)]);

        assert_eq!(cache.lookup("a"), Ok(1));
        cache.insert("d", 4);

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.contains("c"));
        assert_eq!(cache.lookup("d"), Ok(4));
    }

    #[test]
    fn test_sync_miss_releases_lock() {
        let cache = filled(&[("a", 1)]);

        for _ in 0..3 {
            assert!(cache.lookup("missing").is_err());
        }
        // a held guard would deadlock here
        cache.insert("b", 2);
        assert_eq!(cache.lookup("b"), Ok(2));
    }

    #[test]
    fn test_sync_remove_and_clear() {
        let cache = filled(&[("a", 1), ("b", 2)]);

        assert_eq!(cache.remove("a"), Ok(1));
        assert_eq!(cache.remove("a"), Err(CacheError::NotFound));

        cache.clear();
        assert_eq!(cache.size(), 0);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_sync_into_inner() {
        let cache = filled(&[("a", 1), ("b", 2)]);
        cache.lookup("a").unwrap();

        let store = cache.into_inner();
        let keys: Vec<_> = store.keys().copied().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_sync_debug_output() {
        let cache = filled(&[("a", 1)]);
        let rendered = format!("{:?}", cache);
        assert!(rendered.contains("SyncCache"));
        assert!(rendered.contains("capacity: 1"));
    }

    #[test]
    fn test_sync_shared_across_threads() {
        let cache = Arc::new(ThreadSafeLruCache::with_capacity(50).unwrap());
        let mut handles = vec![];

        for t in 0..8u64 {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..500u64 {
                    cache.insert((t, i), t * 1_000 + i);
                    if let Ok(value) = cache.lookup(&(t, i)) {
                        assert_eq!(value, t * 1_000 + i);
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.size() <= 50);
        assert_eq!(cache.capacity(), 50);
    }
}
