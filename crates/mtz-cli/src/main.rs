//! mtz - Matrix Test-Oracle Operations CLI
//!
//! Usage:
//!   mtz gen 8 10 tests/case1            # 8x8 matrix, values in [-10, 10]
//!   mtz gen 8 10 tests/case1 --rang     # also write the rank artifact
//!   mtz run ./solver tests/case1 ...    # check a solver against cases
//!   mtz inspect tests/case1 --verify    # re-derive the oracle by elimination

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;
mod output;

use commands::{gen, inspect, run};

/// mtz - determinant test-oracle tool
///
/// Generates random matrices with exactly-known determinant and rank, and
/// checks external determinant solvers against those oracles.
#[derive(Parser)]
#[command(name = "mtz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a test case: matrix, determinant, and optional rank files
    Gen {
        /// Matrix dimension n (produces an n x n matrix)
        #[arg(value_name = "SIZE")]
        size: usize,

        /// Diagonal values are drawn from [-MAX_ABS, MAX_ABS] by default
        #[arg(value_name = "MAX_ABS")]
        max_abs: i64,

        /// Base path; writes <BASE>_mat, <BASE>_det and, with --rang, <BASE>_rang
        #[arg(value_name = "BASE")]
        output_base: PathBuf,

        /// Override the lower bound of the value range
        #[arg(long, value_name = "MIN", allow_hyphen_values = true)]
        min: Option<i64>,

        /// Also write the rank artifact
        #[arg(long)]
        rang: bool,

        /// Keep zero diagonal draws (enables rank-deficient cases)
        #[arg(long)]
        allow_zero: bool,

        /// Seed for reproducible generation
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Total scramble iterations (default: 16 per row)
        #[arg(long, value_name = "N")]
        iterations: Option<usize>,

        /// Lower bound of the scramble coefficient range
        #[arg(long, default_value = "-2", value_name = "C", allow_hyphen_values = true)]
        coeff_min: i64,

        /// Upper bound of the scramble coefficient range
        #[arg(long, default_value = "2", value_name = "C", allow_hyphen_values = true)]
        coeff_max: i64,
    },

    /// Run an external solver against generated cases and judge agreement
    Run {
        /// Path to the solver; it reads a matrix on stdin and prints the determinant
        #[arg(value_name = "PROGRAM")]
        program: PathBuf,

        /// Test-case base paths (each expects <BASE>_mat and <BASE>_det)
        #[arg(value_name = "BASE", required = true)]
        bases: Vec<PathBuf>,

        /// Relative tolerance for agreement
        #[arg(long, default_value = "1e-2", value_name = "TOL")]
        tol: f64,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect a generated test case's artifacts
    Inspect {
        /// Test-case base path
        #[arg(value_name = "BASE")]
        base: PathBuf,

        /// Recompute determinant and rank from the matrix by elimination
        /// and check them against the oracle artifacts
        #[arg(long)]
        verify: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Gen {
            size,
            max_abs,
            output_base,
            min,
            rang,
            allow_zero,
            seed,
            iterations,
            coeff_min,
            coeff_max,
        } => gen::run(&gen::GenArgs {
            size,
            max_abs,
            output_base,
            min,
            rang,
            allow_zero,
            seed,
            iterations,
            coeff_min,
            coeff_max,
        }),

        Commands::Run {
            program,
            bases,
            tol,
            json,
        } => run::run(&program, &bases, tol, json),

        Commands::Inspect { base, verify } => inspect::run(&base, verify),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
