//! Plain-text artifact files for matrices and oracle scalars.
//!
//! Matrix format: line 1 holds the dimension `n`, line 2 holds all `n*n`
//! entries row-major, space-separated. Integer-valued entries are written
//! without a fractional part (`4`, not `4.0`); the reader accepts either
//! form and tolerates entries spread over arbitrary whitespace.
//!
//! A test case persists as three flat files sharing a base path:
//! `<base>_mat`, `<base>_det`, and optionally `<base>_rang`.

use crate::error::{MatrizError, Result};
use crate::generate::TestCase;
use crate::primitives::Matrix;
use std::fmt::Write as _;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Suffix of the matrix artifact.
pub const MATRIX_SUFFIX: &str = "_mat";
/// Suffix of the determinant artifact.
pub const DETERMINANT_SUFFIX: &str = "_det";
/// Suffix of the rank artifact.
pub const RANK_SUFFIX: &str = "_rang";

/// Path of the matrix artifact for a base name.
#[must_use]
pub fn matrix_path(base: &Path) -> PathBuf {
    with_suffix(base, MATRIX_SUFFIX)
}

/// Path of the determinant artifact for a base name.
#[must_use]
pub fn determinant_path(base: &Path) -> PathBuf {
    with_suffix(base, DETERMINANT_SUFFIX)
}

/// Path of the rank artifact for a base name.
#[must_use]
pub fn rank_path(base: &Path) -> PathBuf {
    with_suffix(base, RANK_SUFFIX)
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Renders a matrix in the artifact text format.
#[must_use]
pub fn matrix_to_string(matrix: &Matrix<f64>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", matrix.n_rows());
    for (idx, value) in matrix.as_slice().iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{value}");
    }
    out.push('\n');
    out
}

/// Writes a matrix in the artifact text format.
///
/// # Errors
///
/// Returns any underlying I/O error.
pub fn write_matrix<W: Write>(matrix: &Matrix<f64>, out: &mut W) -> Result<()> {
    out.write_all(matrix_to_string(matrix).as_bytes())?;
    Ok(())
}

/// Reads a matrix from the artifact text format.
///
/// # Errors
///
/// Fails when the dimension or an entry does not parse, or when fewer than
/// `n*n` entries are present.
pub fn read_matrix<R: BufRead>(reader: &mut R) -> Result<Matrix<f64>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    let mut tokens = content.split_whitespace();

    let size_token = tokens
        .next()
        .ok_or_else(|| MatrizError::parse("matrix size", ""))?;
    let n: usize = size_token
        .parse()
        .map_err(|_| MatrizError::parse("matrix size", size_token))?;

    let mut data = Vec::with_capacity(n * n);
    for token in tokens.take(n * n) {
        let value: f64 = token
            .parse()
            .map_err(|_| MatrizError::parse("matrix entry", token))?;
        data.push(value);
    }

    if data.len() != n * n {
        return Err(MatrizError::DimensionMismatch {
            expected: format!("{n}x{n} = {} entries", n * n),
            actual: format!("{} entries", data.len()),
        });
    }

    Matrix::from_vec(n, n, data)
}

/// Reads a matrix artifact from disk.
///
/// # Errors
///
/// Fails on I/O errors or an unparsable artifact.
pub fn read_matrix_file(path: &Path) -> Result<Matrix<f64>> {
    let file = fs::File::open(path)?;
    read_matrix(&mut std::io::BufReader::new(file))
}

/// Writes a single scalar value as one line.
///
/// # Errors
///
/// Returns any underlying I/O error.
pub fn write_scalar<W: Write, T: std::fmt::Display>(value: T, out: &mut W) -> Result<()> {
    writeln!(out, "{value}")?;
    Ok(())
}

/// Reads a single scalar value from a one-line artifact.
///
/// # Errors
///
/// Fails when the content does not parse as `T`.
pub fn read_scalar<R: BufRead, T: FromStr>(reader: &mut R, what: &str) -> Result<T> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    let trimmed = content.trim();
    trimmed
        .parse()
        .map_err(|_| MatrizError::parse(what, trimmed))
}

/// Reads a scalar artifact from disk.
///
/// # Errors
///
/// Fails on I/O errors or an unparsable artifact.
pub fn read_scalar_file<T: FromStr>(path: &Path, what: &str) -> Result<T> {
    let file = fs::File::open(path)?;
    read_scalar(&mut std::io::BufReader::new(file), what)
}

impl TestCase {
    /// Persists the case as `<base>_mat`, `<base>_det`, and (with
    /// `with_rank`) `<base>_rang`.
    ///
    /// All artifact contents are rendered before the first file is created;
    /// if any write fails, files written so far are removed so a failed
    /// generation leaves no partial bundle behind.
    ///
    /// Returns the paths written.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error encountered.
    pub fn write_files(&self, base: &Path, with_rank: bool) -> Result<Vec<PathBuf>> {
        let mut artifacts = vec![
            (matrix_path(base), matrix_to_string(&self.matrix)),
            (
                determinant_path(base),
                format!("{}\n", self.oracle.determinant),
            ),
        ];
        if with_rank {
            artifacts.push((rank_path(base), format!("{}\n", self.oracle.rank)));
        }

        let mut written: Vec<PathBuf> = Vec::with_capacity(artifacts.len());
        for (path, content) in artifacts {
            if let Err(err) = fs::write(&path, content) {
                for done in &written {
                    let _ = fs::remove_file(done);
                }
                return Err(err.into());
            }
            written.push(path);
        }
        Ok(written)
    }
}
