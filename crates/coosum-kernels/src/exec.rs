//! Execution context for the parallel addition pipeline.
//!
//! The pipeline's contract is written against an accelerator command
//! queue; this backend substitutes a caller-owned thread pool for the
//! device queue. The contract is unchanged: stages submitted through one
//! [`QueueContext::run`] call execute as an ordered sequence, and a
//! backend that fails to come up surfaces its diagnostic instead of
//! touching any operand.

use rayon::{ThreadPool, ThreadPoolBuilder};
use thiserror::Error;

/// The backend failed to build before anything was dispatched.
///
/// This is the only failure the addition paths can produce, and the one
/// condition callers are expected to handle (typically by falling back to
/// the host adder). `log` carries the backend's human-readable
/// diagnostic.
#[derive(Debug, Error)]
#[error("parallel backend failed to build: {log}")]
pub struct BuildFailure {
    pub log: String,
}

impl From<rayon::ThreadPoolBuildError> for BuildFailure {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self {
            log: err.to_string(),
        }
    }
}

/// A command-queue stand-in owned by the caller.
///
/// Ownership is external to any single addition: one context can serve
/// many pipeline invocations, but invocations sharing a context must be
/// serialized by the caller. Nothing is held by the context between
/// calls.
pub struct QueueContext {
    pool: ThreadPool,
}

impl QueueContext {
    /// Builds a context sized to the available parallelism.
    pub fn new() -> Result<Self, BuildFailure> {
        Ok(Self {
            pool: ThreadPoolBuilder::new().build()?,
        })
    }

    /// Builds a context with an explicit worker count.
    pub fn with_threads(threads: usize) -> Result<Self, BuildFailure> {
        Ok(Self {
            pool: ThreadPoolBuilder::new().num_threads(threads).build()?,
        })
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs one pipeline invocation on this context, blocking until every
    /// stage issued inside `op` has completed. Sequencing inside `op` is
    /// the ordering guarantee: a stage only starts after the previous one
    /// returned.
    pub fn run<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        self.pool.install(op)
    }
}
