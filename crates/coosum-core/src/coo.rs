//! COO sparse matrix over an unbounded 2-D index domain, plus the flat
//! exchange forms (cell list and compressed triple-arrays) the kernels
//! and the text codec operate on.

use std::collections::HashMap;

use crate::scalar::Scalar;

/// One stored entry: the exchange unit between the matrix, the parallel
/// pipeline, and the codec.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> Cell<T> {
    #[inline]
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }
}

/// Flat triple-array form: three index-aligned vectors of equal length.
///
/// Structurally the same information as a cell list; this is the shape the
/// wire format uses.
#[derive(Debug, Clone, Default)]
pub struct Compressed<T> {
    pub row: Vec<usize>,
    pub col: Vec<usize>,
    pub data: Vec<T>,
}

impl<T> Compressed<T> {
    #[inline]
    #[must_use]
    pub const fn nnz(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn from_parts(row: Vec<usize>, col: Vec<usize>, data: Vec<T>) -> Result<Self, String> {
        if row.len() != data.len() || col.len() != data.len() {
            return Err("row/col/data must have equal length".into());
        }
        Ok(Self { row, col, data })
    }
}

impl<T: Copy> Compressed<T> {
    #[must_use]
    pub fn to_cells(&self) -> Vec<Cell<T>> {
        (0..self.data.len())
            .map(|k| Cell::new(self.row[k], self.col[k], self.data[k]))
            .collect()
    }

    #[must_use]
    pub fn from_cells(cells: &[Cell<T>]) -> Self {
        let mut row = Vec::with_capacity(cells.len());
        let mut col = Vec::with_capacity(cells.len());
        let mut data = Vec::with_capacity(cells.len());
        for c in cells {
            row.push(c.row);
            col.push(c.col);
            data.push(c.value);
        }
        Self { row, col, data }
    }

    /// Sorts the three arrays in place by (row, col), row-major.
    ///
    /// Exports carry no ordering guarantee, so callers that want a
    /// deterministic layout apply this themselves.
    pub fn sort_by_coord(&mut self) {
        let mut cells = self.to_cells();
        cells.sort_by_key(|c| (c.row, c.col));
        for (k, c) in cells.iter().enumerate() {
            self.row[k] = c.row;
            self.col[k] = c.col;
            self.data[k] = c.value;
        }
    }
}

/// Sparse 2-D matrix in coordinate form: one map keyed by `(row, col)`.
///
/// The index domain is unbounded and non-negative; there is no shape and
/// no bounds checking. Coordinates that were never stored read as zero
/// through [`get`](CooMatrix::get); absence and a stored exact zero are
/// distinguishable only through [`len`](CooMatrix::len) / iteration.
#[derive(Debug, Clone, Default)]
pub struct CooMatrix<T> {
    map: HashMap<(usize, usize), T>,
}

impl<T: Scalar> CooMatrix<T> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { map: HashMap::new() }
    }

    /// Builds a matrix by absorbing each cell in order; on duplicate
    /// coordinates the last write wins.
    #[must_use]
    pub fn from_cells(cells: &[Cell<T>]) -> Self {
        let mut m = Self {
            map: HashMap::with_capacity(cells.len()),
        };
        for c in cells {
            m.set(c.row, c.col, c.value);
        }
        m
    }

    #[must_use]
    pub fn from_compressed(compressed: &Compressed<T>) -> Self {
        let mut m = Self {
            map: HashMap::with_capacity(compressed.nnz()),
        };
        for k in 0..compressed.nnz() {
            m.set(compressed.row[k], compressed.col[k], compressed.data[k]);
        }
        m
    }

    /// Stores `value` unconditionally, exact zeros included. No pruning
    /// happens on direct assignment.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.map.insert((row, col), value);
    }

    /// Stored value, or zero for a coordinate that has never been set.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.map.get(&(row, col)).copied().unwrap_or_else(T::zero)
    }

    #[inline]
    pub fn remove(&mut self, row: usize, col: usize) {
        self.map.remove(&(row, col));
    }

    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Number of stored entries, explicit zeros included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates stored entries in unspecified order, explicit zeros
    /// included.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Cell<T>> + '_ {
        self.map
            .iter()
            .map(|(&(row, col), &value)| Cell::new(row, col, value))
    }

    /// Exports the non-zero entries as a cell list; entries whose stored
    /// value is exactly zero are omitted. Order is unspecified.
    #[must_use]
    pub fn to_cells(&self) -> Vec<Cell<T>> {
        self.iter().filter(|c| !c.value.is_zero()).collect()
    }

    /// Exports the non-zero entries in compressed triple-array form.
    #[must_use]
    pub fn to_compressed(&self) -> Compressed<T> {
        Compressed::from_cells(&self.to_cells())
    }

    /// Equality oracle: tolerance-aware double subset containment.
    ///
    /// Holds iff every non-zero entry of `self` matches `other.get` at the
    /// same coordinate within the scalar's tolerance, and symmetrically.
    /// This is the only comparison the type exposes, and the ground truth
    /// used to compare the host and parallel addition paths.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.eq_subset(other) && other.eq_subset(self)
    }

    fn eq_subset(&self, other: &Self) -> bool {
        self.map
            .iter()
            .all(|(&(row, col), &value)| other.get(row, col).approx_eq(value))
    }
}
