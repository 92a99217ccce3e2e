//! Manual LRU - A bounded key/value cache with explicit insert
//!
//! Values are forced into the cache by the caller; nothing is computed on a
//! miss. Eviction is strict least-recently-used, and reads count as uses.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use cache::{LruCache, LruStore, SyncCache, ThreadSafeLruCache};
pub use config::Config;
pub use error::{CacheError, Result};
