//! Concurrency Stress Task
//!
//! Workers share one thread-safe cache. Each repeatedly inserts a key it
//! alone owns and immediately looks it up. The key may already have been
//! evicted by another worker, but a hit must return exactly the value this
//! worker inserted.

use std::sync::Arc;

use chrono::Utc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

use crate::cache::ThreadSafeLruCache;
use crate::models::{StressReport, WorkerReport};

/// Cache shape used by stress runs: `(worker_id, round)` maps to itself.
pub type StressCache = ThreadSafeLruCache<(usize, usize), (usize, usize)>;

/// Worker id reserved for filler entries, never used by a real worker.
const FILLER_WORKER: usize = usize::MAX;

/// Fills the cache to capacity with entries no worker will read, so the
/// first worker inserts already trigger evictions.
pub fn prefill(cache: &StressCache) {
    for i in 0..cache.capacity() {
        cache.insert((FILLER_WORKER, i), (FILLER_WORKER, i));
    }
    debug!(entries = cache.size(), "cache prefilled");
}

/// Spawns one stress worker on the blocking thread pool.
///
/// # Arguments
/// * `cache` - shared cache
/// * `worker_id` - owner id placed in every key the worker writes
/// * `iterations` - insert/lookup rounds to run
///
/// # Returns
/// A JoinHandle yielding the worker's report. The worker stops at the first
/// corrupted read.
pub fn spawn_stress_worker(
    cache: Arc<StressCache>,
    worker_id: usize,
    iterations: usize,
) -> JoinHandle<WorkerReport> {
    tokio::task::spawn_blocking(move || {
        let mut report = WorkerReport::new(worker_id);

        for round in 0..iterations {
            let key = (worker_id, round);
            cache.insert(key, key);

            match cache.lookup(&key) {
                Ok(value) if value == key => report.record_hit(),
                Ok(value) => {
                    warn!(worker_id, round, ?value, "read back a value this worker did not write");
                    report.record_corruption();
                    break;
                }
                Err(_) => report.record_miss(),
            }
        }

        debug!(
            worker_id,
            hits = report.hits,
            misses = report.misses,
            "stress worker finished"
        );
        report
    })
}

/// Runs `threads` workers to completion and aggregates their reports.
///
/// # Errors
/// Returns the JoinError of the first worker that panicked.
pub async fn run_stress(
    cache: Arc<StressCache>,
    threads: usize,
    iterations: usize,
) -> Result<StressReport, JoinError> {
    let started_at = Utc::now();
    info!(threads, iterations, capacity = cache.capacity(), "starting stress run");

    let handles: Vec<_> = (0..threads)
        .map(|worker_id| spawn_stress_worker(Arc::clone(&cache), worker_id, iterations))
        .collect();

    let mut workers = Vec::with_capacity(handles.len());
    for handle in handles {
        workers.push(handle.await?);
    }

    let report = StressReport::new(started_at, iterations, workers, cache.stats());
    info!(
        hits = report.hits,
        misses = report.misses,
        corruptions = report.corruptions,
        evictions = report.cache.evictions,
        "stress run finished"
    );
    Ok(report)
}
