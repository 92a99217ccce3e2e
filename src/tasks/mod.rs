//! Background Tasks Module
//!
//! Blocking worker tasks that exercise a shared cache from many threads.
//!
//! # Tasks
//! - Stress: each worker inserts and reads back its own keys and checks
//!   that every hit returns the value it wrote

mod stress;

pub use stress::{prefill, run_stress, spawn_stress_worker, StressCache};
