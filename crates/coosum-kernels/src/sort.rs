//! Parallel comparator sort and the shared coordinate-key comparator.

use std::cmp::Ordering;

use coosum_core::Cell;
use rayon::prelude::*;

/// Composite coordinate key: row ascending, then col ascending. The same
/// comparator drives all three pipeline stages, so equal keys mean equal
/// coordinates everywhere.
#[inline]
pub fn cmp_coord<T>(a: &Cell<T>, b: &Cell<T>) -> Ordering {
    (a.row, a.col).cmp(&(b.row, b.col))
}

/// Stable parallel sort by an arbitrary comparator.
///
/// Stability is part of the primitive's contract, though the addition
/// pipeline never depends on the tie order: entries with equal keys are
/// collapsed by the reduction stage regardless.
pub fn par_sort_by<T, F>(items: &mut [T], cmp: F)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    items.par_sort_by(cmp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_row_then_col() {
        let mut cells = vec![
            Cell::new(1, 0, 3.0f64),
            Cell::new(0, 2, 2.0),
            Cell::new(0, 1, 1.0),
            Cell::new(1, 0, 4.0),
        ];
        par_sort_by(&mut cells, cmp_coord);
        let keys: Vec<(usize, usize)> = cells.iter().map(|c| (c.row, c.col)).collect();
        assert_eq!(keys, vec![(0, 1), (0, 2), (1, 0), (1, 0)]);
        // Stable: the two (1, 0) entries keep their input order.
        assert_eq!(cells[2].value, 3.0);
        assert_eq!(cells[3].value, 4.0);
    }
}
