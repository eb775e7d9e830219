//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::compare::{compare, ComparisonResult, ErrorKind};
pub use crate::error::{MatrizError, Result};
pub use crate::generate::{GeneratorConfig, TestCase};
pub use crate::harness::{CaseOutcome, CaseReport, Harness};
pub use crate::oracle::Oracle;
pub use crate::primitives::Matrix;
