//! Dense cumulative-cost matrix and its dynamic-programming builder.

use std::ops::Index;

use serde::{Serialize, Serializer};
use tracing::{debug, instrument};

use crate::error::DxwError;
use crate::signal::SignalView;

/// Cumulative absolute-difference cost between two signals.
///
/// Shape is `(a.len(), b.len())`, stored row-major. Cell `(i, j)` holds the
/// cheapest total cost of any warping path from `(0, 0)` that ends by
/// matching `a[i]` with `b[j]`. Every cell is finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Fill the matrix for two validated signals.
    ///
    /// Equivalent to the textbook padded table of shape `(n + 1, m + 1)` with
    /// an infinite border and a zero origin. The border is never stored: the
    /// first cell takes its local cost alone, and out-of-matrix predecessors
    /// read as infinity.
    #[instrument(skip(a, b), fields(rows = a.len(), cols = b.len()))]
    pub(crate) fn build(a: SignalView<'_>, b: SignalView<'_>) -> Self {
        let a = a.as_slice();
        let b = b.as_slice();
        let n = a.len();
        let m = b.len();

        let mut data = vec![f64::INFINITY; n * m];

        #[allow(clippy::needless_range_loop)]
        for i in 0..n {
            for j in 0..m {
                let local = (a[i] - b[j]).abs();

                let best_prev = if i == 0 && j == 0 {
                    0.0
                } else {
                    // Up: C[i-1][j]
                    let up = if i > 0 { data[(i - 1) * m + j] } else { f64::INFINITY };
                    // Left: C[i][j-1]
                    let left = if j > 0 { data[i * m + j - 1] } else { f64::INFINITY };
                    // Diagonal: C[i-1][j-1]
                    let diag = if i > 0 && j > 0 {
                        data[(i - 1) * m + j - 1]
                    } else {
                        f64::INFINITY
                    };
                    up.min(left).min(diag)
                };

                data[i * m + j] = local + best_prev;
            }
        }

        let matrix = Self { rows: n, cols: m, data };
        debug!(accumulated_cost = matrix.accumulated_cost(), "cost matrix complete");
        matrix
    }

    /// Return the number of rows (length of the first signal).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of columns (length of the second signal).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Return the cumulative cost at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self[(i, j)]
    }

    /// Return row `i` as a slice of length `cols`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row index {i} out of bounds for {} rows", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over the rows in order.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    /// Return the row-major backing storage.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy the matrix out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }

    /// Return the bottom-right cell: the total cost of the optimal alignment.
    #[must_use]
    pub fn accumulated_cost(&self) -> f64 {
        self.data[self.data.len() - 1]
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.rows, "row index {i} out of bounds for {} rows", self.rows);
        assert!(j < self.cols, "column index {j} out of bounds for {} columns", self.cols);
        &self.data[i * self.cols + j]
    }
}

/// Serialized as a list of rows, matching a `(rows, cols)` nested array.
impl Serialize for CostMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_rows())
    }
}

/// Build the cumulative cost matrix between two raw sequences.
///
/// Both sequences are validated before any cell is computed, so no partial
/// matrix is ever produced.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`DxwError::EmptySignal`] | `s1` or `s2` is empty |
/// | [`DxwError::NonFiniteValue`] | Any sample is NaN or infinite |
pub fn build_cost(s1: &[f64], s2: &[f64]) -> Result<CostMatrix, DxwError> {
    let a = SignalView::new(s1)?;
    let b = SignalView::new(s2)?;
    Ok(CostMatrix::build(a, b))
}
