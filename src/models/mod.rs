//! Models Module
//!
//! Serializable report types produced by the stress runner.

mod report;

pub use report::{StressReport, WorkerReport};
