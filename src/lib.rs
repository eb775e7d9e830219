//! Matriz: test-oracle generation and verification for determinant solvers.
//!
//! Matriz builds random square matrices whose determinant and rank are known
//! exactly *by construction*, then checks an external solver against that
//! oracle. The construction starts from a diagonal matrix (determinant =
//! product of the diagonal, rank = count of nonzero diagonal entries) and
//! scrambles it with elementary row replacements, which change neither value.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let config = GeneratorConfig::new(4)
//!     .with_value_range(-10, 10)
//!     .with_iterations(8)
//!     .with_seed(42);
//! let case = config.generate().unwrap();
//!
//! // The oracle was fixed before scrambling; elimination agrees with it.
//! let det = case.matrix.determinant();
//! let scale = case.oracle.determinant.abs().max(1.0);
//! assert!((det - case.oracle.determinant).abs() <= 1e-6 * scale);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core row-major [`Matrix`] type with elimination routines
//! - [`oracle`]: Ground-truth determinant/rank derived from the diagonal
//! - [`generate`]: Configurable generation pipeline (sampling + scrambling)
//! - [`serialization`]: Plain-text matrix and scalar artifact files
//! - [`compare`]: Two-regime tolerance comparator
//! - [`harness`]: External-solver invocation and per-case reporting

pub mod compare;
pub mod error;
pub mod generate;
pub mod harness;
pub mod oracle;
pub mod prelude;
pub mod primitives;
pub mod serialization;

pub use error::{MatrizError, Result};
pub use generate::{GeneratorConfig, TestCase};
pub use oracle::Oracle;
pub use primitives::Matrix;
