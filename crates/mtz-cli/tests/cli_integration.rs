//! CLI Integration Tests for mtz-cli.

#![allow(clippy::unwrap_used)] // Tests can use unwrap

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Create an mtz command
fn mtz() -> Command {
    Command::cargo_bin("mtz").expect("Failed to find mtz binary")
}

/// Generate a reproducible test case under `dir`, returning its base path.
fn generate_case(dir: &Path, name: &str, extra: &[&str]) -> PathBuf {
    let base = dir.join(name);
    let mut args = vec![
        "gen".to_string(),
        "4".to_string(),
        "10".to_string(),
        base.display().to_string(),
        "--seed".to_string(),
        "42".to_string(),
        "--iterations".to_string(),
        "8".to_string(),
    ];
    args.extend(extra.iter().map(|s| (*s).to_string()));
    mtz().args(&args).assert().success();
    base
}

/// Read the persisted oracle determinant of a case.
fn oracle_det(base: &Path) -> String {
    let mut det_path = base.as_os_str().to_os_string();
    det_path.push("_det");
    fs::read_to_string(det_path).unwrap().trim().to_string()
}

/// Create a stub solver script that swallows stdin and prints `answer`.
#[cfg(unix)]
fn stub_solver(dir: &Path, answer: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("solver.sh");
    fs::write(&path, format!("#!/bin/sh\ncat > /dev/null\necho {answer}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

// ============================================================================
// Gen Command
// ============================================================================

#[test]
fn test_gen_writes_matrix_and_det_artifacts() {
    let dir = TempDir::new().unwrap();
    let base = generate_case(dir.path(), "case", &[]);

    let mat = fs::read_to_string(format!("{}_mat", base.display())).unwrap();
    let mut lines = mat.lines();
    assert_eq!(lines.next(), Some("4"));
    let entries: Vec<&str> = lines.next().unwrap().split_whitespace().collect();
    assert_eq!(entries.len(), 16);

    let det = oracle_det(&base);
    assert!(det.parse::<f64>().is_ok());
}

#[test]
fn test_gen_without_rang_flag_skips_rank_artifact() {
    let dir = TempDir::new().unwrap();
    let base = generate_case(dir.path(), "case", &[]);
    assert!(!Path::new(&format!("{}_rang", base.display())).exists());
}

#[test]
fn test_gen_with_rang_flag_writes_rank_artifact() {
    let dir = TempDir::new().unwrap();
    let base = generate_case(dir.path(), "case", &["--rang"]);

    let rank = fs::read_to_string(format!("{}_rang", base.display())).unwrap();
    // Zero-avoidance is the default: a 4x4 case is full-rank.
    assert_eq!(rank.trim(), "4");
}

#[test]
fn test_gen_is_reproducible_with_seed() {
    let dir = TempDir::new().unwrap();
    let a = generate_case(dir.path(), "a", &[]);
    let b = generate_case(dir.path(), "b", &[]);

    let mat_a = fs::read_to_string(format!("{}_mat", a.display())).unwrap();
    let mat_b = fs::read_to_string(format!("{}_mat", b.display())).unwrap();
    assert_eq!(mat_a, mat_b);
    assert_eq!(oracle_det(&a), oracle_det(&b));
}

#[test]
fn test_gen_rejects_zero_size() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("case");
    mtz()
        .args(["gen", "0", "10"])
        .arg(&base)
        .assert()
        .failure()
        .stderr(predicate::str::contains("size"));
    assert!(!Path::new(&format!("{}_mat", base.display())).exists());
}

#[test]
fn test_gen_rejects_inverted_coeff_range() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("case");
    mtz()
        .args(["gen", "3", "10"])
        .arg(&base)
        .args(["--coeff-min", "2", "--coeff-max", "-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("coefficient"));
}

// ============================================================================
// Run Command
// ============================================================================

#[cfg(unix)]
#[test]
fn test_run_passes_agreeing_solver() {
    let dir = TempDir::new().unwrap();
    let base = generate_case(dir.path(), "case", &[]);
    let solver = stub_solver(dir.path(), &oracle_det(&base));

    mtz()
        .arg("run")
        .arg(&solver)
        .arg(&base)
        .assert()
        .success()
        .stdout(predicate::str::contains("[PASS]"))
        .stdout(predicate::str::contains("1/1 cases passed"));
}

#[cfg(unix)]
#[test]
fn test_run_fails_disagreeing_solver_and_prints_both_values() {
    let dir = TempDir::new().unwrap();
    let base = generate_case(dir.path(), "case", &[]);
    let det: f64 = oracle_det(&base).parse().unwrap();
    let wrong = det + det.abs().max(1.0) * 10.0 + 7.0;
    let solver = stub_solver(dir.path(), &wrong.to_string());

    mtz()
        .arg("run")
        .arg(&solver)
        .arg(&base)
        .assert()
        .failure()
        .stdout(predicate::str::contains("[FAIL]"))
        .stdout(predicate::str::contains("expected (oracle)"))
        .stdout(predicate::str::contains("observed (solver)"));
}

#[cfg(unix)]
#[test]
fn test_run_continues_past_broken_case() {
    let dir = TempDir::new().unwrap();
    let good = generate_case(dir.path(), "good", &[]);
    let missing = dir.path().join("missing");
    let solver = stub_solver(dir.path(), &oracle_det(&good));

    // The broken case is reported, the good case still runs and passes.
    mtz()
        .arg("run")
        .arg(&solver)
        .arg(&missing)
        .arg(&good)
        .assert()
        .failure()
        .stdout(predicate::str::contains("[FAIL]"))
        .stdout(predicate::str::contains("[PASS]"))
        .stdout(predicate::str::contains("1/2 cases passed"));
}

#[cfg(unix)]
#[test]
fn test_run_json_report() {
    let dir = TempDir::new().unwrap();
    let base = generate_case(dir.path(), "case", &[]);
    let solver = stub_solver(dir.path(), &oracle_det(&base));

    let output = mtz()
        .arg("run")
        .arg(&solver)
        .arg(&base)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cases = reports.as_array().unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0]["outcome"]["status"], "passed");
}

#[test]
fn test_run_rejects_missing_program() {
    mtz()
        .args(["run", "/nonexistent/solver", "case"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

// ============================================================================
// Inspect Command
// ============================================================================

#[test]
fn test_inspect_prints_oracle() {
    let dir = TempDir::new().unwrap();
    let base = generate_case(dir.path(), "case", &["--rang"]);

    mtz()
        .arg("inspect")
        .arg(&base)
        .assert()
        .success()
        .stdout(predicate::str::contains("4x4"))
        .stdout(predicate::str::contains("determinant (oracle)"))
        .stdout(predicate::str::contains("rank (oracle)"));
}

#[test]
fn test_inspect_verify_agrees_with_elimination() {
    let dir = TempDir::new().unwrap();
    let base = generate_case(dir.path(), "case", &["--rang"]);

    mtz()
        .arg("inspect")
        .arg(&base)
        .arg("--verify")
        .assert()
        .success()
        .stdout(predicate::str::contains("[PASS]"));
}

#[test]
fn test_inspect_verify_detects_corrupt_oracle() {
    let dir = TempDir::new().unwrap();
    let base = generate_case(dir.path(), "case", &[]);

    let det: f64 = oracle_det(&base).parse().unwrap();
    let corrupt = det + det.abs().max(1.0) * 10.0 + 7.0;
    fs::write(format!("{}_det", base.display()), format!("{corrupt}\n")).unwrap();

    mtz()
        .arg("inspect")
        .arg(&base)
        .arg("--verify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Verification failed"));
}

#[test]
fn test_inspect_missing_case() {
    mtz()
        .args(["inspect", "/nonexistent/case"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
