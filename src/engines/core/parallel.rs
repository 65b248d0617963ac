//! Shared worker pool for data-parallel computations
//!
//! Only compiled with the `parallel` feature. The pool is built on first use
//! and lives for the rest of the process.

use std::sync::OnceLock;

use rayon::{ThreadPool, ThreadPoolBuilder};

static GLOBAL_POOL: OnceLock<Option<ThreadPool>> = OnceLock::new();

/// Get the default number of threads to use
pub fn default_num_threads() -> usize {
    num_cpus::get()
}

/// Build the worker pool if it does not exist yet
///
/// If the pool cannot be built, work falls back to rayon's global pool.
pub fn initialize_thread_pool() {
    GLOBAL_POOL.get_or_init(|| {
        let num_threads = default_num_threads();

        match ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|idx| format!("dnakit-worker-{}", idx))
            .build()
        {
            Ok(pool) => {
                log::info!("Initialized thread pool with {} threads", num_threads);
                Some(pool)
            }
            Err(e) => {
                log::warn!("Failed to create thread pool, using rayon's global pool: {}", e);
                None
            }
        }
    });
}

/// Run `f` inside the worker pool
pub fn install<F, R>(f: F) -> R
where
    F: FnOnce() -> R + Send,
    R: Send,
{
    initialize_thread_pool();

    match GLOBAL_POOL.get().and_then(Option::as_ref) {
        Some(pool) => pool.install(f),
        None => f(),
    }
}
