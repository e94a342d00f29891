//! Segmented reduction (reduce-by-key) over key-sorted slices.

use rayon::prelude::*;

/// Collapses each maximal run of adjacent equal-key items into one item.
///
/// `same_key` decides run membership; `combine` folds a run left to right
/// and must be associative (the addition pipeline sums values, whose
/// floating result may differ from the host path by reassociation — the
/// equality oracle's tolerance absorbs that). Output length is the number
/// of distinct keys, never more than the input length.
///
/// Run heads are located in parallel, then each run is folded in
/// parallel.
#[must_use]
pub fn par_reduce_by_key<T, K, C>(items: &[T], same_key: K, combine: C) -> Vec<T>
where
    T: Copy + Send + Sync,
    K: Fn(&T, &T) -> bool + Sync,
    C: Fn(&T, &T) -> T + Sync,
{
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }
    // Indices where a new run starts; collect preserves index order.
    let heads: Vec<usize> = (0..n)
        .into_par_iter()
        .filter(|&k| k == 0 || !same_key(&items[k - 1], &items[k]))
        .collect();

    heads
        .par_iter()
        .enumerate()
        .map(|(h, &start)| {
            let end = heads.get(h + 1).copied().unwrap_or(n);
            let mut acc = items[start];
            for item in &items[start + 1..end] {
                acc = combine(&acc, item);
            }
            acc
        })
        .collect()
}
