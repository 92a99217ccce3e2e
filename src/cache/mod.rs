//! Cache Module
//!
//! Provides a bounded key/value store with strict LRU eviction and a
//! mutex-guarded wrapper for concurrent callers.

mod entry;
mod lru;
mod stats;
mod store;
mod sync;
mod traits;


// Re-export public types
pub(crate) use entry::Entry;
pub use lru::{Iter, NodeId, RecencyList};
pub use stats::CacheStats;
pub use store::LruStore;
pub use sync::{SyncCache, ThreadSafeLruCache};
pub use traits::LruCache;

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_CACHE_SIZE: usize = 100;
