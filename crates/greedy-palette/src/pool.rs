//! Worker pool for the data-parallel phases.

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::api::QuantResult;

/// Build a pool with exactly `workers` threads (at least one).
///
/// Each call gets its own pool so the worker count is an explicit input
/// rather than process-wide state.
pub(crate) fn build_pool(workers: usize) -> QuantResult<ThreadPool> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .thread_name(|i| format!("greedy-palette-{i}"))
        .build()?;
    Ok(pool)
}
