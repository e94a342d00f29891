//! Sort–merge–reduce addition pipeline over an execution context.

use coosum_core::{Cell, CooMatrix, Scalar};

use crate::exec::QueueContext;
use crate::merge::par_merge_by;
use crate::reduce::par_reduce_by_key;
use crate::sort::{cmp_coord, par_sort_by};

/// Per-invocation pipeline configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddOptions {
    /// When set, exact-zero sums are dropped from the reduced cell list
    /// before the rebuild, making a cancelling addition look identical to
    /// the host path. Off by default: the reduced list is absorbed as-is,
    /// so cancellations may leave explicit zero entries behind. See
    /// DESIGN.md for why the asymmetric default was kept.
    pub prune_zeros: bool,
}

/// Parallel addition with the default options; see [`add_parallel_with`].
#[must_use]
pub fn add_parallel<T: Scalar>(
    a: &CooMatrix<T>,
    b: &CooMatrix<T>,
    ctx: &QueueContext,
) -> CooMatrix<T> {
    add_parallel_with(a, b, ctx, AddOptions::default())
}

/// Adds two matrices through the parallel sort–merge–reduce pipeline.
///
/// Both operands are exported to cell lists, each list is sorted by the
/// composite (row, col) key, the two sorted lists are merged by the same
/// key, and a segmented reduction sums each equal-key run into a single
/// cell. The reduced list is then absorbed into a fresh matrix via `set`.
/// Neither operand is mutated.
///
/// The stages form a hard dependency chain, enforced by issuing them in
/// sequence inside a single [`QueueContext::run`] call. Invocations
/// sharing one context must be serialized by the caller; independent
/// contexts may run concurrently.
#[must_use]
pub fn add_parallel_with<T: Scalar>(
    a: &CooMatrix<T>,
    b: &CooMatrix<T>,
    ctx: &QueueContext,
    opts: AddOptions,
) -> CooMatrix<T> {
    let mut lhs = a.to_cells();
    let mut rhs = b.to_cells();
    let reduced = ctx.run(move || {
        par_sort_by(&mut lhs, cmp_coord);
        par_sort_by(&mut rhs, cmp_coord);
        let merged = par_merge_by(&lhs, &rhs, cmp_coord);
        let mut reduced = par_reduce_by_key(
            &merged,
            |x: &Cell<T>, y: &Cell<T>| x.row == y.row && x.col == y.col,
            |x, y| Cell::new(x.row, x.col, x.value + y.value),
        );
        if opts.prune_zeros {
            reduced.retain(|c| !c.value.is_zero());
        }
        reduced
    });
    CooMatrix::from_cells(&reduced)
}
