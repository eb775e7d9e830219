//! Core compute primitive (row-major Matrix).
//!
//! The matrix type underpins both halves of the crate: generation mutates it
//! through elementary row operations, verification re-derives determinant and
//! rank from it by elimination.

mod matrix;

pub use matrix::Matrix;
