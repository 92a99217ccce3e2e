//! LRU Stress - concurrency self-check for the thread-safe cache
//!
//! Fills a shared cache, runs many workers that insert and read back their
//! own keys, and prints a JSON report. Exits with an error if any worker
//! ever read a value it did not write.

use std::sync::Arc;

use anyhow::{bail, Context};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use manual_lru::tasks::{prefill, run_stress, StressCache};
use manual_lru::Config;

/// Main entry point for the stress runner.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load and validate configuration from environment variables
/// 3. Create the shared cache and prefill it to capacity
/// 4. Run the stress workers and print the report
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "manual_lru=info,lru_stress=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    config.validate().context("invalid configuration")?;
    info!(
        "Configuration loaded: cache_size={}, threads={}, iterations={}",
        config.cache_size, config.stress_threads, config.stress_iterations
    );

    let cache = Arc::new(
        StressCache::with_capacity(config.cache_size).context("failed to create cache")?,
    );
    prefill(&cache);

    let report = run_stress(
        Arc::clone(&cache),
        config.stress_threads,
        config.stress_iterations,
    )
    .await
    .context("stress worker panicked")?;

    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("failed to encode report")?
    );

    if !report.is_clean() {
        error!(corruptions = report.corruptions, "cache returned foreign values");
        bail!("{} corrupted reads detected", report.corruptions);
    }

    info!("Stress run clean");
    Ok(())
}
