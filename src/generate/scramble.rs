//! Invariant-preserving matrix scrambling.

use crate::primitives::Matrix;
use rand::Rng;

/// Destroys the visible diagonal structure of `matrix` with `iterations`
/// random elementary row replacements `row[i] += c * row[j]`, `i != j`.
///
/// Each replacement adds a multiple of one row to a *different* row, which
/// changes neither the determinant nor the row space. The source row is
/// resampled until distinct from the target; replacing a row with a multiple
/// of itself would scale the determinant by `1 + c` and is never executed.
/// Matrices with fewer than two rows have no distinct pair and are left
/// untouched.
///
/// The coefficient is an integer drawn from `coeff_range` inclusive; a zero
/// draw is a harmless no-op. Entry magnitudes can grow by up to the
/// coefficient bound per iteration, which bounds how much precision the
/// solver under test must retain.
pub fn scramble<R: Rng>(
    matrix: &mut Matrix<f64>,
    rng: &mut R,
    iterations: usize,
    coeff_range: (i64, i64),
) {
    let n = matrix.n_rows();
    if n < 2 {
        return;
    }

    let (coeff_min, coeff_max) = coeff_range;
    for _ in 0..iterations {
        let target = rng.gen_range(0..n);
        let mut source = rng.gen_range(0..n);
        while source == target {
            source = rng.gen_range(0..n);
        }

        let coeff = rng.gen_range(coeff_min..=coeff_max) as f64;
        matrix.row_replace(target, source, coeff);
    }
}
