//! Compressed sparse row storage for feature and interaction matrices.
//!
//! Layout for a matrix with `nnz` stored values:
//! - `values`: \[nnz\] - the stored values, row by row
//! - `col_indices`: \[nnz\] - column of each stored value, strictly increasing within a row
//! - `row_ptrs`: \[nrows + 1\] - start offset into `values`/`col_indices` of each row
//!
//! ```text
//! [[1, 0, 2],       values:      [1, 2, 3, 4]
//!  [0, 0, 3],   ->  col_indices: [0, 2, 2, 0]
//!  [4, 0, 0]]       row_ptrs:    [0, 2, 3, 4]
//! ```

use crate::error::{RecommendError, RecommendResult};
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    nrows: usize,
    ncols: usize,
    values: Vec<f64>,
    col_indices: Vec<usize>,
    row_ptrs: Vec<usize>,
}

/// Borrowed view over the stored entries of a single row.
#[derive(Debug, Clone, Copy)]
pub struct SparseRow<'a> {
    pub indices: &'a [usize],
    pub values: &'a [f64],
}

impl SparseRow<'_> {
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// True when the row has no non-zero value.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Dot product against a dense vector indexed by column.
    fn dot_dense(&self, dense: &[f64]) -> f64 {
        self.indices
            .iter()
            .zip(self.values)
            .map(|(col, value)| value * dense[*col])
            .sum()
    }
}

impl CsrMatrix {
    /// Builds a matrix from raw CSR arrays, validating the layout.
    pub fn new(
        nrows: usize,
        ncols: usize,
        values: Vec<f64>,
        col_indices: Vec<usize>,
        row_ptrs: Vec<usize>,
    ) -> RecommendResult<Self> {
        if values.len() != col_indices.len() {
            return Err(RecommendError::DataAlignment(format!(
                "values length ({}) != col_indices length ({})",
                values.len(),
                col_indices.len()
            )));
        }

        let expected_ptrs = nrows.checked_add(1).ok_or_else(|| {
            RecommendError::DataAlignment(format!("too many rows: {}", nrows))
        })?;
        if row_ptrs.len() != expected_ptrs {
            return Err(RecommendError::DataAlignment(format!(
                "row_ptrs length ({}) != nrows + 1 ({})",
                row_ptrs.len(),
                expected_ptrs
            )));
        }

        if row_ptrs[0] != 0 || row_ptrs[nrows] != values.len() {
            return Err(RecommendError::DataAlignment(format!(
                "row_ptrs must span [0, {}], got [{}, {}]",
                values.len(),
                row_ptrs[0],
                row_ptrs[nrows]
            )));
        }

        for row in 0..nrows {
            let (start, end) = (row_ptrs[row], row_ptrs[row + 1]);
            if end < start {
                return Err(RecommendError::DataAlignment(format!(
                    "row_ptrs not monotonic at index {}: {} < {}",
                    row + 1,
                    end,
                    start
                )));
            }
            if end > col_indices.len() {
                return Err(RecommendError::DataAlignment(format!(
                    "row_ptrs[{}] = {} is past the {} stored values",
                    row + 1,
                    end,
                    col_indices.len()
                )));
            }
            let cols = &col_indices[start..end];
            if let Some(&col) = cols.iter().find(|c| **c >= ncols) {
                return Err(RecommendError::DataAlignment(format!(
                    "column index {} out of bounds for {} columns (row {})",
                    col, ncols, row
                )));
            }
            if cols.windows(2).any(|w| w[0] >= w[1]) {
                return Err(RecommendError::DataAlignment(format!(
                    "column indices of row {} are not strictly increasing",
                    row
                )));
            }
        }

        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(RecommendError::DataAlignment(format!(
                "non finite value at position {}",
                pos
            )));
        }

        Ok(CsrMatrix {
            nrows,
            ncols,
            values,
            col_indices,
            row_ptrs,
        })
    }

    /// Builds a matrix from `(row, col, value)` entries in any order.
    /// Entries addressing the same cell are summed.
    pub fn from_triplets(
        nrows: usize,
        ncols: usize,
        triplets: &[(usize, usize, f64)],
    ) -> RecommendResult<Self> {
        if let Some((row, col, _)) = triplets
            .iter()
            .find(|(row, col, _)| *row >= nrows || *col >= ncols)
        {
            return Err(RecommendError::DataAlignment(format!(
                "entry ({}, {}) out of bounds for a {}x{} matrix",
                row, col, nrows, ncols
            )));
        }

        let mut sorted = triplets.to_vec();
        sorted.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        let mut values: Vec<f64> = Vec::with_capacity(sorted.len());
        let mut col_indices: Vec<usize> = Vec::with_capacity(sorted.len());
        let mut row_ptrs = vec![0; nrows + 1];
        let mut last: Option<(usize, usize)> = None;

        for (row, col, value) in sorted {
            if last == Some((row, col)) {
                if let Some(v) = values.last_mut() {
                    *v += value;
                }
                continue;
            }
            values.push(value);
            col_indices.push(col);
            row_ptrs[row + 1] += 1;
            last = Some((row, col));
        }

        for row in 0..nrows {
            row_ptrs[row + 1] += row_ptrs[row];
        }

        CsrMatrix::new(nrows, ncols, values, col_indices, row_ptrs)
    }

    /// An all-zero matrix of the given shape.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        CsrMatrix {
            nrows,
            ncols,
            values: vec![],
            col_indices: vec![],
            row_ptrs: vec![0; nrows + 1],
        }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn row(&self, row: usize) -> Option<SparseRow<'_>> {
        if row >= self.nrows {
            return None;
        }
        Some(self.row_view(row))
    }

    // `row` must be in bounds, the layout is validated at construction.
    fn row_view(&self, row: usize) -> SparseRow<'_> {
        let (start, end) = (self.row_ptrs[row], self.row_ptrs[row + 1]);
        SparseRow {
            indices: &self.col_indices[start..end],
            values: &self.values[start..end],
        }
    }

    /// Returns the transposed matrix, rows become columns.
    pub fn transpose(&self) -> CsrMatrix {
        let mut row_ptrs = vec![0; self.ncols + 1];
        for col in &self.col_indices {
            row_ptrs[col + 1] += 1;
        }
        for col in 0..self.ncols {
            row_ptrs[col + 1] += row_ptrs[col];
        }

        let mut next = row_ptrs.clone();
        let mut values = vec![0.0; self.nnz()];
        let mut col_indices = vec![0; self.nnz()];
        for row in 0..self.nrows {
            let view = self.row_view(row);
            for (col, value) in view.indices.iter().zip(view.values) {
                let dest = next[*col];
                values[dest] = *value;
                col_indices[dest] = row;
                next[*col] += 1;
            }
        }

        CsrMatrix {
            nrows: self.ncols,
            ncols: self.nrows,
            values,
            col_indices,
            row_ptrs,
        }
    }

    /// Cosine similarity between row `query` and every row of the matrix,
    /// in row order. Rows with a zero norm score 0.
    pub fn cosine_against_all(&self, query: usize) -> RecommendResult<Vec<f64>> {
        let query_row = self.row(query).ok_or_else(|| {
            RecommendError::NotFound(format!(
                "row {} in a matrix with {} rows",
                query, self.nrows
            ))
        })?;

        let query_norm = query_row.norm();
        if query_norm == 0.0 {
            return Ok(vec![0.0; self.nrows]);
        }

        let mut dense_query = vec![0.0; self.ncols];
        for (col, value) in query_row.indices.iter().zip(query_row.values) {
            dense_query[*col] = *value;
        }

        let scores = (0..self.nrows)
            .into_par_iter()
            .map(|row| {
                let view = self.row_view(row);
                let norm = view.norm();
                if norm == 0.0 {
                    return 0.0;
                }
                (view.dot_dense(&dense_query) / (query_norm * norm)).clamp(-1.0, 1.0)
            })
            .collect();
        Ok(scores)
    }
}
