//! Sparse pair sets and score matrices
//!
//! The batch layer is sparse on both ends: a [`CandidateSet`] restricts
//! which document pairs are worth aligning, and a [`SparseScoreMatrix`]
//! holds the scores that came back, row-compressed so that million-cell
//! cross products with few survivors stay cheap to store and query.

/// Sparse boolean restriction over (query, index) coordinate pairs
///
/// Coordinates are kept sorted and deduplicated; iteration order is
/// row-major regardless of insertion order.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    pairs: Vec<(usize, usize)>,
}

impl CandidateSet {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut pairs: Vec<(usize, usize)> = pairs.into_iter().collect();
        pairs.sort_unstable();
        pairs.dedup();
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.pairs.binary_search(&(row, col)).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn as_slice(&self) -> &[(usize, usize)] {
        &self.pairs
    }
}

/// Row-compressed sparse score matrix over [0, rows) x [0, cols)
///
/// Cells outside the stored support read as 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseScoreMatrix {
    rows: usize,
    cols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<f64>,
}

impl SparseScoreMatrix {
    /// Build from (row, col, value) triplets.
    ///
    /// Triplets may arrive in any order; each cell is expected at most
    /// once (batch results are keyed by coordinate, so completion order
    /// carries no information).
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        mut triplets: Vec<(usize, usize, f64)>,
    ) -> Self {
        triplets.sort_unstable_by_key(|&(i, j, _)| (i, j));

        let mut row_ptr = vec![0usize; rows + 1];
        let mut col_idx = Vec::with_capacity(triplets.len());
        let mut values = Vec::with_capacity(triplets.len());

        for &(i, j, v) in &triplets {
            debug_assert!(i < rows && j < cols);
            row_ptr[i + 1] += 1;
            col_idx.push(j);
            values.push(v);
        }
        for i in 0..rows {
            row_ptr[i + 1] += row_ptr[i];
        }

        Self {
            rows,
            cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Score at (row, col); 0.0 for any cell without a stored entry
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row >= self.rows {
            return 0.0;
        }
        let lo = self.row_ptr[row];
        let hi = self.row_ptr[row + 1];
        match self.col_idx[lo..hi].binary_search(&col) {
            Ok(pos) => self.values[lo + pos],
            Err(_) => 0.0,
        }
    }

    /// Stored entries in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.rows).flat_map(move |i| {
            (self.row_ptr[i]..self.row_ptr[i + 1])
                .map(move |k| (i, self.col_idx[k], self.values[k]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_set_sorts_and_dedups() {
        let set = CandidateSet::from_pairs(vec![(2, 0), (0, 1), (2, 0), (1, 2)]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.as_slice(), &[(0, 1), (1, 2), (2, 0)]);
        assert!(set.contains(2, 0));
        assert!(!set.contains(0, 0));
    }

    #[test]
    fn test_csr_lookup() {
        let m = SparseScoreMatrix::from_triplets(
            3,
            4,
            vec![(2, 1, 5.0), (0, 3, 1.5), (0, 0, 2.0)],
        );
        assert_eq!(m.nnz(), 3);
        assert_eq!(m.get(0, 0), 2.0);
        assert_eq!(m.get(0, 3), 1.5);
        assert_eq!(m.get(2, 1), 5.0);
        assert_eq!(m.get(1, 1), 0.0);
        assert_eq!(m.get(2, 3), 0.0);
    }

    #[test]
    fn test_csr_iter_row_major() {
        let m = SparseScoreMatrix::from_triplets(2, 2, vec![(1, 0, 1.0), (0, 1, 2.0)]);
        let entries: Vec<_> = m.iter().collect();
        assert_eq!(entries, vec![(0, 1, 2.0), (1, 0, 1.0)]);
    }

    #[test]
    fn test_csr_insertion_order_irrelevant() {
        let a = SparseScoreMatrix::from_triplets(2, 2, vec![(0, 0, 1.0), (1, 1, 2.0)]);
        let b = SparseScoreMatrix::from_triplets(2, 2, vec![(1, 1, 2.0), (0, 0, 1.0)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_matrix() {
        let m = SparseScoreMatrix::from_triplets(0, 0, Vec::new());
        assert_eq!(m.nnz(), 0);
        assert_eq!(m.get(0, 0), 0.0);
    }
}
