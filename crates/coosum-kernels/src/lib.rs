//! Addition kernels for coosum COO matrices (pure Rust, rayon-parallel)
//!
//! Two independently implemented, behaviorally equivalent addition paths:
//! the sequential [`host`] accumulator (the reference oracle) and the
//! [`pipeline`] that chains the parallel [`sort`], [`merge`] and
//! [`reduce`] primitives on a caller-owned [`exec::QueueContext`].

pub mod exec;
pub mod host;
pub mod merge;
pub mod pipeline;
pub mod reduce;
pub mod sort;

pub use exec::{BuildFailure, QueueContext};
pub use host::{add, add_assign};
pub use merge::par_merge_by;
pub use pipeline::{add_parallel, add_parallel_with, AddOptions};
pub use reduce::par_reduce_by_key;
pub use sort::{cmp_coord, par_sort_by};
