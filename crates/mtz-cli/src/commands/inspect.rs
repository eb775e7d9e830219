//! Inspect command implementation.

use crate::error::{CliError, Result};
use crate::output;
use matriz::compare::compare;
use matriz::serialization::{
    determinant_path, matrix_path, rank_path, read_matrix_file, read_scalar_file,
};
use std::path::Path;

/// Tolerance for re-deriving the oracle by floating-point elimination.
const VERIFY_REL_TOL: f64 = 1e-6;

/// Run the inspect command
pub(crate) fn run(base: &Path, verify: bool) -> Result<()> {
    let mat_path = matrix_path(base);
    if !mat_path.exists() {
        return Err(CliError::FileNotFound(mat_path));
    }

    let matrix = read_matrix_file(&mat_path)?;
    let expected_det: f64 = read_scalar_file(&determinant_path(base), "determinant")?;

    output::section(&format!("Test case {}", base.display()));
    output::kv("size", format!("{0}x{0}", matrix.n_rows()));
    output::kv("determinant (oracle)", expected_det);

    let rank_file = rank_path(base);
    let expected_rank: Option<usize> = if rank_file.exists() {
        let rank = read_scalar_file(&rank_file, "rank")?;
        output::kv("rank (oracle)", rank);
        Some(rank)
    } else {
        None
    };
    output::kv("max |entry|", matrix.max_abs());

    if verify {
        verify_oracle(&matrix, expected_det, expected_rank)?;
    }
    Ok(())
}

/// Re-derive determinant (and rank when persisted) by elimination and check
/// them against the oracle artifacts.
fn verify_oracle(
    matrix: &matriz::Matrix<f64>,
    expected_det: f64,
    expected_rank: Option<usize>,
) -> Result<()> {
    let derived = matrix.determinant();
    let comparison = compare(expected_det, derived, VERIFY_REL_TOL);
    if comparison.passed {
        output::success(&format!(
            "determinant by elimination agrees: {} = {:e}",
            comparison.error_kind, comparison.observed_error
        ));
    } else {
        output::fail(&format!(
            "determinant by elimination is {derived}, oracle says {expected_det}"
        ));
        return Err(CliError::VerificationFailed(format!(
            "determinant mismatch: elimination {derived} vs oracle {expected_det}"
        )));
    }

    if let Some(rank) = expected_rank {
        let derived_rank = matrix.rank();
        if derived_rank == rank {
            output::success(&format!("rank by elimination agrees: {derived_rank}"));
        } else {
            output::fail(&format!(
                "rank by elimination is {derived_rank}, oracle says {rank}"
            ));
            return Err(CliError::VerificationFailed(format!(
                "rank mismatch: elimination {derived_rank} vs oracle {rank}"
            )));
        }
    }
    Ok(())
}
