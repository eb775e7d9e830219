//! External-solver invocation and per-case verdicts.
//!
//! The harness feeds a persisted matrix artifact to the solver under test on
//! standard input, captures the single determinant it prints, and judges it
//! against the persisted oracle. Each case is independent; a failing or
//! broken case is reported and the batch continues. Invocations are blocking
//! with no timeout: a hung solver hangs the harness.

use crate::compare::{compare, ComparisonResult};
use crate::error::{MatrizError, Result};
use crate::serialization::{determinant_path, matrix_path, read_scalar_file};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Default relative tolerance of the reference harness.
pub const DEFAULT_REL_TOL: f64 = 1e-2;

/// Verdict for one test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    /// Solver output agreed with the oracle within tolerance.
    Passed {
        /// Oracle determinant.
        expected: f64,
        /// Solver determinant.
        observed: f64,
        /// The fired comparison.
        comparison: ComparisonResult,
    },
    /// Solver ran cleanly but its output disagreed with the oracle.
    Mismatch {
        /// Oracle determinant.
        expected: f64,
        /// Solver determinant.
        observed: f64,
        /// The fired comparison.
        comparison: ComparisonResult,
    },
    /// The case could not be judged: missing artifacts, launch failure,
    /// error exit, or unparsable output.
    Failed {
        /// Failure description.
        reason: String,
    },
}

/// Per-case harness report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    /// Test-case base name.
    pub name: String,
    /// Verdict.
    pub outcome: CaseOutcome,
}

impl CaseReport {
    /// True only when the case ran and agreed with the oracle.
    #[must_use]
    pub fn passed(&self) -> bool {
        matches!(self.outcome, CaseOutcome::Passed { .. })
    }
}

/// Driver for checking an external determinant solver against persisted
/// test cases.
///
/// # Examples
///
/// ```no_run
/// use matriz::harness::Harness;
/// use std::path::Path;
///
/// let harness = Harness::new("./solver").with_rel_tol(1e-2);
/// let report = harness.run_case(Path::new("tests/case1"));
/// println!("{}: {}", report.name, report.passed());
/// ```
#[derive(Debug, Clone)]
pub struct Harness {
    program: PathBuf,
    rel_tol: f64,
}

impl Harness {
    /// Creates a harness for the given solver program with the default
    /// tolerance.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            rel_tol: DEFAULT_REL_TOL,
        }
    }

    /// Set the relative tolerance used to judge agreement.
    #[must_use]
    pub fn with_rel_tol(mut self, rel_tol: f64) -> Self {
        self.rel_tol = rel_tol;
        self
    }

    /// The configured solver path.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Runs one case: read `<base>_det`, pipe `<base>_mat` into the solver,
    /// parse its single output value, compare.
    ///
    /// Per-case problems are folded into [`CaseOutcome::Failed`]; this never
    /// panics and never aborts a batch.
    #[must_use]
    pub fn run_case(&self, base: &Path) -> CaseReport {
        let name = base.display().to_string();
        let outcome = match self.evaluate(base) {
            Ok((expected, observed, comparison)) => {
                if comparison.passed {
                    CaseOutcome::Passed {
                        expected,
                        observed,
                        comparison,
                    }
                } else {
                    CaseOutcome::Mismatch {
                        expected,
                        observed,
                        comparison,
                    }
                }
            }
            Err(err) => CaseOutcome::Failed {
                reason: err.to_string(),
            },
        };
        CaseReport { name, outcome }
    }

    /// Runs every case, in order, continuing past failures.
    #[must_use]
    pub fn run(&self, bases: &[PathBuf]) -> Vec<CaseReport> {
        bases.iter().map(|base| self.run_case(base)).collect()
    }

    fn evaluate(&self, base: &Path) -> Result<(f64, f64, ComparisonResult)> {
        let expected: f64 = read_scalar_file(&determinant_path(base), "determinant")?;
        let matrix_file = fs::File::open(matrix_path(base))?;

        let output = Command::new(&self.program)
            .stdin(Stdio::from(matrix_file))
            .output()
            .map_err(|e| MatrizError::external(&self.program, format!("cannot launch: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MatrizError::external(
                &self.program,
                format!("{}, stderr: {}", output.status, stderr.trim()),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let observed: f64 = stdout.trim().parse().map_err(|_| {
            MatrizError::external(
                &self.program,
                format!("output is not a single number: {:?}", stdout.trim()),
            )
        })?;

        Ok((expected, observed, compare(expected, observed, self.rel_tol)))
    }
}
