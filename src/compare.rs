//! Two-regime tolerance comparator for oracle-vs-solver values.
//!
//! A fixed relative tolerance is meaningless near zero: any nonzero observed
//! value against an expected value of ~0 gives a relative error near 100%
//! even for numerically excellent results. Below the tolerance band the
//! comparator therefore switches to an absolute-error judgment.

use serde::{Deserialize, Serialize};

/// Which comparison rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Plain `|expected - observed|` against the tolerance.
    Absolute,
    /// `|expected - observed| / max(|expected|, |observed|)` against the
    /// tolerance.
    Relative,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Absolute => write!(f, "abs_error"),
            ErrorKind::Relative => write!(f, "rel_error"),
        }
    }
}

/// Outcome of a single tolerance comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Whether the values agree within tolerance.
    pub passed: bool,
    /// The error magnitude in the fired rule's units.
    pub observed_error: f64,
    /// Which rule fired.
    pub error_kind: ErrorKind,
}

/// Judges agreement of `observed` with `expected` within `rel_tol`.
///
/// When either magnitude lies within `rel_tol` of zero the judgment is
/// absolute (`|expected - observed| <= rel_tol`); otherwise it is the
/// symmetric relative test `|expected - observed| <= rel_tol *
/// max(|expected|, |observed|)`. Keying the regime on either value keeps the
/// verdict symmetric in its arguments.
///
/// # Examples
///
/// ```
/// use matriz::compare::compare;
///
/// assert!(compare(100.0, 100.9, 1e-2).passed);
/// assert!(!compare(100.0, 102.0, 1e-2).passed);
/// ```
#[must_use]
pub fn compare(expected: f64, observed: f64, rel_tol: f64) -> ComparisonResult {
    let diff = (expected - observed).abs();
    let near_zero = expected.abs() <= rel_tol || observed.abs() <= rel_tol;

    if near_zero {
        ComparisonResult {
            passed: diff <= rel_tol,
            observed_error: diff,
            error_kind: ErrorKind::Absolute,
        }
    } else {
        let scale = expected.abs().max(observed.abs());
        let rel_err = diff / scale;
        ComparisonResult {
            passed: rel_err <= rel_tol,
            observed_error: rel_err,
            error_kind: ErrorKind::Relative,
        }
    }
}
