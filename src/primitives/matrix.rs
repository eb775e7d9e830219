//! Matrix type for 2D numeric data.

use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};

/// Relative threshold for deciding that an elimination pivot has vanished.
const PIVOT_EPS: f64 = 1e-12;

/// A 2D matrix of floating-point values (row-major storage).
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{rows}x{cols} = {} entries", rows * cols),
                actual: format!("{} entries", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true when the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if the row index is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[T] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns the underlying data as a slice, row-major.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Swaps two rows in place.
    ///
    /// # Panics
    ///
    /// Panics if either row index is out of bounds.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for col in 0..self.cols {
            self.data.swap(a * self.cols + col, b * self.cols + col);
        }
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Creates a square matrix with the given values on the main diagonal
    /// and zeros everywhere else.
    #[must_use]
    pub fn from_diagonal(diag: &[f64]) -> Self {
        let n = diag.len();
        let mut matrix = Self::zeros(n, n);
        for (i, &value) in diag.iter().enumerate() {
            matrix.data[i * n + i] = value;
        }
        matrix
    }

    /// Elementary row replacement: `row[target] += coeff * row[source]`.
    ///
    /// This operation preserves both the determinant and the row space.
    ///
    /// # Panics
    ///
    /// Panics if `target == source` (that would scale the row by `1 + coeff`
    /// and change the determinant) or if either index is out of bounds.
    pub fn row_replace(&mut self, target: usize, source: usize, coeff: f64) {
        assert!(
            target != source,
            "row replacement requires distinct target and source rows"
        );
        assert!(target < self.rows && source < self.rows);
        for col in 0..self.cols {
            let addend = coeff * self.data[source * self.cols + col];
            self.data[target * self.cols + col] += addend;
        }
    }

    /// Returns the largest absolute entry, or 0.0 for an empty matrix.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
    }

    /// Computes the determinant by Gaussian elimination with partial
    /// pivoting, tracking the sign of row swaps.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        assert!(self.is_square(), "determinant requires a square matrix");
        let n = self.rows;
        if n == 0 {
            return 1.0;
        }

        let (work, sign, pivots) = self.eliminate();
        if pivots < n {
            return 0.0;
        }

        let mut det = sign;
        for i in 0..n {
            det *= work[i * n + i];
        }
        det
    }

    /// Computes the rank: the number of surviving pivot rows after Gaussian
    /// elimination with partial pivoting.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    #[must_use]
    pub fn rank(&self) -> usize {
        assert!(self.is_square(), "rank requires a square matrix");
        let (_, _, pivots) = self.eliminate();
        pivots
    }

    /// Reduces a working copy to row echelon form.
    ///
    /// Returns the work buffer, the accumulated swap sign, and the number of
    /// pivots found. A pivot counts only when its magnitude stays above a
    /// threshold relative to the largest entry of the original matrix, so
    /// rows zeroed by cancellation are not mistaken for independent ones.
    fn eliminate(&self) -> (Vec<f64>, f64, usize) {
        let n = self.rows;
        let mut work = self.data.clone();
        let mut sign = 1.0_f64;
        let mut pivot_row = 0usize;

        let threshold = PIVOT_EPS * self.max_abs().max(1.0);

        for col in 0..n {
            if pivot_row == n {
                break;
            }

            let mut best = pivot_row;
            for r in (pivot_row + 1)..n {
                if work[r * n + col].abs() > work[best * n + col].abs() {
                    best = r;
                }
            }
            if work[best * n + col].abs() <= threshold {
                continue;
            }

            if best != pivot_row {
                for c in 0..n {
                    work.swap(pivot_row * n + c, best * n + c);
                }
                sign = -sign;
            }

            let pivot = work[pivot_row * n + col];
            for r in (pivot_row + 1)..n {
                let factor = work[r * n + col] / pivot;
                if factor == 0.0 {
                    continue;
                }
                for c in col..n {
                    work[r * n + c] -= factor * work[pivot_row * n + c];
                }
            }
            pivot_row += 1;
        }

        (work, sign, pivot_row)
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
