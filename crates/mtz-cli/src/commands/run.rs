//! Run command implementation.

use crate::error::{CliError, Result};
use crate::output;
use matriz::harness::{CaseOutcome, CaseReport, Harness};
use std::path::{Path, PathBuf};

/// Run the run command
pub(crate) fn run(program: &Path, bases: &[PathBuf], tol: f64, json: bool) -> Result<()> {
    if !program.exists() {
        return Err(CliError::FileNotFound(program.to_path_buf()));
    }

    let harness = Harness::new(program).with_rel_tol(tol);
    let reports = harness.run(bases);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).expect("reports serialize to JSON")
        );
    } else {
        print_reports(&reports);
    }

    let failed = reports.iter().filter(|r| !r.passed()).count();
    if failed > 0 {
        return Err(CliError::CasesFailed {
            failed,
            total: reports.len(),
        });
    }
    Ok(())
}

fn print_reports(reports: &[CaseReport]) {
    for report in reports {
        match &report.outcome {
            CaseOutcome::Passed { comparison, .. } => {
                output::success(&format!(
                    "{}: {} = {:e}",
                    report.name, comparison.error_kind, comparison.observed_error
                ));
            }
            CaseOutcome::Mismatch {
                expected,
                observed,
                comparison,
            } => {
                output::fail(&format!(
                    "{}: {} = {:e}",
                    report.name, comparison.error_kind, comparison.observed_error
                ));
                output::kv("expected (oracle)", expected);
                output::kv("observed (solver)", observed);
            }
            CaseOutcome::Failed { reason } => {
                output::fail(&format!("{}: {reason}", report.name));
            }
        }
    }

    let passed = reports.iter().filter(|r| r.passed()).count();
    println!();
    println!("{passed}/{} cases passed", reports.len());
}
