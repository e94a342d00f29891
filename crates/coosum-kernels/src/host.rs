//! Sequential accumulate-and-prune addition: the reference path.

use coosum_core::{CooMatrix, Scalar};

/// Accumulates every stored entry of `b` into `a` in place.
///
/// Coordinates whose accumulated value lands on exact zero are erased,
/// so a cancelling addition keeps `a` sparse. Deterministic and
/// single-threaded; this is the oracle the parallel path is checked
/// against.
pub fn add_assign<T: Scalar>(a: &mut CooMatrix<T>, b: &CooMatrix<T>) {
    for cell in b.iter() {
        let mut sum = a.get(cell.row, cell.col);
        sum += cell.value;
        if sum.is_zero() {
            a.remove(cell.row, cell.col);
        } else {
            a.set(cell.row, cell.col, sum);
        }
    }
}

/// Cloning variant of [`add_assign`]; neither operand is mutated.
#[must_use]
pub fn add<T: Scalar>(a: &CooMatrix<T>, b: &CooMatrix<T>) -> CooMatrix<T> {
    let mut out = a.clone();
    add_assign(&mut out, b);
    out
}
