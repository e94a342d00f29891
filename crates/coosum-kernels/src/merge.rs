//! Parallel two-way merge of sorted slices by a shared comparator.

use std::cmp::Ordering;

use rayon::prelude::*;

/// Inputs below this total length are merged sequentially.
const SMALL_MERGE_LIMIT: usize = 4096;
/// Output elements per parallel chunk.
const MERGE_CHUNK: usize = 4096;

/// Co-rank search: number of elements of `a` among the first `d` elements
/// of the merged output, with `a` winning ties.
///
/// The predicate `a[i] <= b[d-1-i]` is monotone in `i` (a is
/// non-decreasing, the mirrored b window non-increasing), so a binary
/// search finds the boundary.
fn split_point<T, F>(a: &[T], b: &[T], d: usize, cmp: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut lo = d.saturating_sub(b.len());
    let mut hi = a.len().min(d);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cmp(&a[mid], &b[d - mid - 1]) == Ordering::Greater {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Merges two comparator-sorted slices into one sorted vector.
///
/// Order-preserving: equal keys from both inputs end up adjacent in the
/// output. Ties take the left operand first, but callers must not rely on
/// which operand an equal-key entry came from.
///
/// Large inputs are partitioned along the output (merge-path diagonals via
/// [`split_point`]) and the chunks are filled in parallel.
#[must_use]
pub fn par_merge_by<T, F>(a: &[T], b: &[T], cmp: F) -> Vec<T>
where
    T: Copy + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let total = a.len() + b.len();
    let mut out: Vec<T> = Vec::with_capacity(total);
    if total == 0 {
        return out;
    }

    if total <= SMALL_MERGE_LIMIT {
        let (mut ia, mut jb) = (0usize, 0usize);
        while ia < a.len() && jb < b.len() {
            if cmp(&a[ia], &b[jb]) == Ordering::Greater {
                out.push(b[jb]);
                jb += 1;
            } else {
                out.push(a[ia]);
                ia += 1;
            }
        }
        out.extend_from_slice(&a[ia..]);
        out.extend_from_slice(&b[jb..]);
        return out;
    }

    let chunks = total.div_ceil(MERGE_CHUNK);
    // One (i, j) split per chunk boundary; splits are monotone because the
    // co-rank is monotone in the diagonal index.
    let splits: Vec<(usize, usize)> = (0..=chunks)
        .into_par_iter()
        .map(|c| {
            let d = (c * total / chunks).min(total);
            let i = split_point(a, b, d, &cmp);
            (i, d - i)
        })
        .collect();

    let out_addr = out.as_mut_ptr() as usize;
    (0..chunks).into_par_iter().for_each(|c| {
        let (mut ia, mut jb) = splits[c];
        let (i1, j1) = splits[c + 1];
        let mut dst = ia + jb;
        let out_ptr = out_addr as *mut T;
        unsafe {
            while ia < i1 && jb < j1 {
                if cmp(&a[ia], &b[jb]) == Ordering::Greater {
                    std::ptr::write(out_ptr.add(dst), b[jb]);
                    jb += 1;
                } else {
                    std::ptr::write(out_ptr.add(dst), a[ia]);
                    ia += 1;
                }
                dst += 1;
            }
            while ia < i1 {
                std::ptr::write(out_ptr.add(dst), a[ia]);
                ia += 1;
                dst += 1;
            }
            while jb < j1 {
                std::ptr::write(out_ptr.add(dst), b[jb]);
                jb += 1;
                dst += 1;
            }
        }
    });
    // Every slot in 0..total was written by exactly one chunk.
    unsafe {
        out.set_len(total);
    }
    out
}
