//! Stress Report DTOs
//!
//! Serializable results of a concurrent stress run.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::CacheStats;

/// Outcome of a single stress worker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkerReport {
    /// Worker index, also the first half of every key it writes
    pub worker_id: usize,
    /// Lookups that found the worker's own value
    pub hits: u64,
    /// Lookups whose key had already been evicted
    pub misses: u64,
    /// Lookups that returned a value the worker did not insert
    pub corruptions: u64,
}

impl WorkerReport {
    /// Creates an empty report for a worker
    pub fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            ..Self::default()
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_corruption(&mut self) {
        self.corruptions += 1;
    }
}

/// Aggregate result of a stress run.
#[derive(Debug, Clone, Serialize)]
pub struct StressReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Number of workers
    pub threads: usize,
    /// Rounds each worker was asked to run
    pub iterations: usize,
    pub hits: u64,
    pub misses: u64,
    pub corruptions: u64,
    /// Per-worker breakdown, ordered by worker id
    pub workers: Vec<WorkerReport>,
    /// Cache statistics at the end of the run
    pub cache: CacheStats,
}

impl StressReport {
    /// Builds a report from finished workers, stamping the finish time
    pub fn new(
        started_at: DateTime<Utc>,
        iterations: usize,
        mut workers: Vec<WorkerReport>,
        cache: CacheStats,
    ) -> Self {
        workers.sort_by_key(|w| w.worker_id);
        Self {
            started_at,
            finished_at: Utc::now(),
            threads: workers.len(),
            iterations,
            hits: workers.iter().map(|w| w.hits).sum(),
            misses: workers.iter().map(|w| w.misses).sum(),
            corruptions: workers.iter().map(|w| w.corruptions).sum(),
            workers,
            cache,
        }
    }

    /// True when no worker ever read back a foreign value.
    pub fn is_clean(&self) -> bool {
        self.corruptions == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_totals() {
        let mut a = WorkerReport::new(1);
        a.record_hit();
        a.record_miss();
        let mut b = WorkerReport::new(0);
        b.record_hit();

        let report = StressReport::new(Utc::now(), 2, vec![a, b], CacheStats::new(4));

        assert_eq!(report.threads, 2);
        assert_eq!(report.hits, 2);
        assert_eq!(report.misses, 1);
        assert!(report.is_clean());
        assert_eq!(report.workers[0].worker_id, 0);
        assert!(report.finished_at >= report.started_at);
    }

    #[test]
    fn test_report_with_corruption_is_not_clean() {
        let mut w = WorkerReport::new(0);
        w.record_corruption();

        let report = StressReport::new(Utc::now(), 1, vec![w], CacheStats::new(1));
        assert!(!report.is_clean());
    }

    #[test]
    fn test_report_serialize() {
        let report = StressReport::new(Utc::now(), 1, vec![WorkerReport::new(0)], CacheStats::new(3));
        let json = serde_json::to_value(&report).unwrap();

        assert!(json["started_at"].is_string());
        assert_eq!(json["cache"]["capacity"], 3);
        assert_eq!(json["workers"][0]["worker_id"], 0);
    }
}
