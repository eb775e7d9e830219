//! Error types for Matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Matriz operations.
///
/// Covers generation-configuration failures, artifact I/O and parsing, and
/// external-solver invocation problems.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::InvalidSize { size: 0 };
/// assert!(err.to_string().contains("matrix size"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Matrix size is not usable (zero).
    InvalidSize {
        /// Requested size
        size: usize,
    },

    /// Diagonal value range is empty or inverted.
    InvalidRange {
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
    },

    /// Scramble coefficient range is empty or inverted.
    InvalidCoeffRange {
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
    },

    /// Matrix/artifact dimensions don't match what was declared.
    DimensionMismatch {
        /// Expected element count description
        expected: String,
        /// Actual element count found
        actual: String,
    },

    /// An artifact file could not be parsed.
    Parse {
        /// What was being parsed (e.g. "matrix size", "determinant")
        what: String,
        /// The offending content
        content: String,
    },

    /// External solver failed: could not be launched, exited with an error,
    /// or produced unusable output.
    ExternalProgram {
        /// Program path as invoked
        program: String,
        /// Failure description, including captured output when available
        reason: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidSize { size } => {
                write!(f, "Invalid matrix size: {size}, expected a positive value")
            }
            MatrizError::InvalidRange { min, max } => {
                write!(f, "Invalid diagonal value range: [{min}, {max}]")
            }
            MatrizError::InvalidCoeffRange { min, max } => {
                write!(f, "Invalid scramble coefficient range: [{min}, {max}]")
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            MatrizError::Parse { what, content } => {
                write!(f, "Cannot parse {what} from {content:?}")
            }
            MatrizError::ExternalProgram { program, reason } => {
                write!(f, "External program {program:?} failed: {reason}")
            }
            MatrizError::Io(e) => write!(f, "I/O error: {e}"),
            MatrizError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MatrizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrizError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MatrizError {
    fn from(err: std::io::Error) -> Self {
        MatrizError::Io(err)
    }
}

impl From<&str> for MatrizError {
    fn from(msg: &str) -> Self {
        MatrizError::Other(msg.to_string())
    }
}

impl From<String> for MatrizError {
    fn from(msg: String) -> Self {
        MatrizError::Other(msg)
    }
}

impl MatrizError {
    /// Create a parse error with context.
    #[must_use]
    pub fn parse(what: &str, content: &str) -> Self {
        Self::Parse {
            what: what.to_string(),
            content: content.to_string(),
        }
    }

    /// Create an external-program error with context.
    #[must_use]
    pub fn external(program: &std::path::Path, reason: impl Into<String>) -> Self {
        Self::ExternalProgram {
            program: program.display().to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
