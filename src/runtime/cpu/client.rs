//! CPU client and its parallelism configuration

use crate::error::{Error, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// How the CPU client spreads independent batch elements over threads
///
/// Without the `rayon` feature every batch runs sequentially and this
/// configuration only affects logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelismConfig {
    /// Threads of a dedicated pool; `None` uses the global rayon pool
    pub num_threads: Option<usize>,
    /// Smallest batch that is worth solving in parallel
    pub min_batch_len: usize,
}

/// Default smallest batch dispatched to the thread pool
const DEFAULT_MIN_BATCH_LEN: usize = 2;

impl ParallelismConfig {
    /// Create a configuration; `None` picks the defaults
    pub const fn new(num_threads: Option<usize>, min_batch_len: Option<usize>) -> Self {
        Self {
            num_threads,
            min_batch_len: match min_batch_len {
                Some(len) => len,
                None => DEFAULT_MIN_BATCH_LEN,
            },
        }
    }

    /// Solve every batch on the calling thread
    pub const fn sequential() -> Self {
        Self::new(Some(1), Some(usize::MAX))
    }
}

impl Default for ParallelismConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// CPU client for operation dispatch
///
/// Cheap to clone; clones share the thread pool and the cancellation flag.
#[derive(Clone, Debug, Default)]
pub struct CpuClient {
    parallelism: ParallelismConfig,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
    cancel: Option<Arc<AtomicBool>>,
}

impl CpuClient {
    /// Create a client using the global thread pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with an explicit parallelism configuration
    ///
    /// Builds a dedicated rayon pool when `num_threads` is set.
    pub fn with_parallelism(parallelism: ParallelismConfig) -> Result<Self> {
        if parallelism.num_threads == Some(0) {
            return Err(Error::invalid_argument(
                "num_threads",
                "thread count must be at least 1",
            ));
        }

        #[cfg(feature = "rayon")]
        let pool = match parallelism.num_threads {
            Some(threads) if threads > 1 => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("geneig-{i}"))
                    .build()
                    .map_err(|e| Error::Internal(format!("failed to build thread pool: {e}")))?;
                Some(Arc::new(pool))
            }
            _ => None,
        };

        Ok(Self {
            parallelism,
            #[cfg(feature = "rayon")]
            pool,
            cancel: None,
        })
    }

    /// Attach a cooperative cancellation flag
    ///
    /// The flag is polled before each batch element is started; a pair that
    /// is already being solved always runs to completion.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Parallelism configuration of this client
    pub fn parallelism(&self) -> ParallelismConfig {
        self.parallelism
    }

    /// Whether the attached cancellation flag is raised
    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Whether a batch of `len` elements is dispatched to the thread pool
    pub(crate) fn runs_parallel(&self, len: usize) -> bool {
        cfg!(feature = "rayon")
            && self.parallelism.num_threads != Some(1)
            && len >= self.parallelism.min_batch_len.max(DEFAULT_MIN_BATCH_LEN)
    }

    /// Run `op` inside this client's dedicated pool, if it has one
    #[cfg(feature = "rayon")]
    pub(crate) fn install_parallelism<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    /// Apply `f` to every task, stopping at the first error.
    ///
    /// When tasks run in parallel the returned error is the one of the lowest
    /// failing task index among the tasks that were evaluated.
    pub(crate) fn try_for_each_task<I, F>(&self, tasks: Vec<I>, f: F) -> Result<()>
    where
        I: Send,
        F: Fn(I) -> Result<()> + Sync + Send,
    {
        #[cfg(feature = "rayon")]
        if self.runs_parallel(tasks.len()) {
            let first_error = self.install_parallelism(|| {
                tasks
                    .into_par_iter()
                    .map(&f)
                    .find_map_first(Result::err)
            });
            return first_error.map_or(Ok(()), Err);
        }

        tasks.into_iter().try_for_each(f)
    }
}
