//! Ground-truth determinant and rank, derived from the diagonal.
//!
//! The oracle is computed from the diagonal values *before* the matrix is
//! scrambled. Row replacements change neither the determinant nor the row
//! space, so the pair stays exact for the scrambled matrix even though
//! elementwise zero-tests on that matrix would be meaningless.

use serde::{Deserialize, Serialize};

/// Relative tolerance for the diagonal zero test.
const ZERO_EPS: f64 = 1e-10;

/// Exactly-known determinant and rank of a generated matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oracle {
    /// Product of the diagonal values.
    pub determinant: f64,
    /// Count of diagonal values not numerically indistinguishable from zero.
    pub rank: usize,
}

impl Oracle {
    /// Derives the oracle from a diagonal vector.
    ///
    /// The determinant of a diagonal matrix is the product of its diagonal
    /// (empty product = 1), and its rank is the number of nonzero entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::oracle::Oracle;
    ///
    /// let oracle = Oracle::from_diagonal(&[2.0, -3.0, 5.0]);
    /// assert_eq!(oracle.determinant, -30.0);
    /// assert_eq!(oracle.rank, 3);
    /// ```
    #[must_use]
    pub fn from_diagonal(diag: &[f64]) -> Self {
        let determinant = diag.iter().product();
        let rank = diag.iter().filter(|&&x| !effectively_zero(x)).count();
        Self { determinant, rank }
    }
}

/// Relative zero test: `|x| <= (|x| + |0|) * eps`.
///
/// For integer-valued diagonals this reduces to `x == 0`, but the tolerant
/// form also holds up when the values have been through floating-point
/// arithmetic.
fn effectively_zero(x: f64) -> bool {
    x.abs() <= x.abs() * ZERO_EPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinant_is_product() {
        let oracle = Oracle::from_diagonal(&[2.0, -3.0, 5.0]);
        assert_eq!(oracle.determinant, -30.0);
        assert_eq!(oracle.rank, 3);
    }

    #[test]
    fn test_zero_entries_zero_determinant() {
        let oracle = Oracle::from_diagonal(&[0.0, 7.0, 0.0, -2.0]);
        assert_eq!(oracle.determinant, 0.0);
        assert_eq!(oracle.rank, 2);
    }

    #[test]
    fn test_empty_diagonal() {
        let oracle = Oracle::from_diagonal(&[]);
        assert_eq!(oracle.determinant, 1.0);
        assert_eq!(oracle.rank, 0);
    }

    #[test]
    fn test_negative_zero_counts_as_zero() {
        let oracle = Oracle::from_diagonal(&[-0.0, 4.0]);
        assert_eq!(oracle.rank, 1);
    }

    #[test]
    fn test_tiny_nonzero_value_keeps_rank() {
        let oracle = Oracle::from_diagonal(&[1e-300, 1.0]);
        assert_eq!(oracle.rank, 2);
    }
}
