//! Gen command implementation.

use crate::error::Result;
use crate::output;
use matriz::generate::GeneratorConfig;
use std::path::PathBuf;

/// Parsed generation options.
pub(crate) struct GenArgs {
    pub size: usize,
    pub max_abs: i64,
    pub output_base: PathBuf,
    pub min: Option<i64>,
    pub rang: bool,
    pub allow_zero: bool,
    pub seed: Option<u64>,
    pub iterations: Option<usize>,
    pub coeff_min: i64,
    pub coeff_max: i64,
}

/// Run the gen command
pub(crate) fn run(args: &GenArgs) -> Result<()> {
    let min = args.min.unwrap_or(-args.max_abs);

    let mut config = GeneratorConfig::new(args.size)
        .with_value_range(min, args.max_abs)
        .with_allow_zero(args.allow_zero)
        .with_coeff_range(args.coeff_min, args.coeff_max);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(iterations) = args.iterations {
        config = config.with_iterations(iterations);
    }

    let case = config.generate()?;
    let written = case.write_files(&args.output_base, args.rang)?;

    output::kv("size", format!("{0}x{0}", args.size));
    output::kv("determinant", case.oracle.determinant);
    if args.rang {
        output::kv("rank", case.oracle.rank);
    }
    for path in &written {
        output::info(&format!("wrote {}", path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use matriz::serialization::{determinant_path, matrix_path, rank_path};

    fn args(base: PathBuf) -> GenArgs {
        GenArgs {
            size: 4,
            max_abs: 10,
            output_base: base,
            min: None,
            rang: false,
            allow_zero: false,
            seed: Some(1),
            iterations: None,
            coeff_min: -2,
            coeff_max: 2,
        }
    }

    #[test]
    fn test_gen_writes_artifacts() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let base = dir.path().join("case");
        run(&args(base.clone())).expect("generation succeeds");
        assert!(matrix_path(&base).exists());
        assert!(determinant_path(&base).exists());
        assert!(!rank_path(&base).exists());
    }

    #[test]
    fn test_gen_with_rank_artifact() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let base = dir.path().join("case");
        let mut a = args(base.clone());
        a.rang = true;
        run(&a).expect("generation succeeds");
        assert!(rank_path(&base).exists());
    }

    #[test]
    fn test_gen_rejects_zero_size() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut a = args(dir.path().join("case"));
        a.size = 0;
        assert!(run(&a).is_err());
    }

    #[test]
    fn test_gen_leaves_nothing_on_invalid_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let base = dir.path().join("case");
        let mut a = args(base.clone());
        a.coeff_min = 5;
        a.coeff_max = -5;
        assert!(run(&a).is_err());
        assert!(!matrix_path(&base).exists());
        assert!(!determinant_path(&base).exists());
    }
}
