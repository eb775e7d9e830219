//! Error types for mtz-cli.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Expected artifact file missing
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Library error (generation, parsing, solver invocation)
    #[error("{0}")]
    Matriz(String),

    /// One or more harness cases did not pass
    #[error("{failed} of {total} cases did not pass")]
    CasesFailed {
        /// Cases that mismatched or broke
        failed: usize,
        /// Cases attempted
        total: usize,
    },

    /// Oracle verification against the persisted matrix failed
    #[error("Verification failed: {0}")]
    VerificationFailed(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound(_) => ExitCode::from(3),
            Self::Io(_) => ExitCode::from(7),
            Self::Matriz(_) => ExitCode::from(1),
            Self::CasesFailed { .. } => ExitCode::from(2),
            Self::VerificationFailed(_) => ExitCode::from(5),
        }
    }
}

impl From<matriz::MatrizError> for CliError {
    fn from(e: matriz::MatrizError) -> Self {
        Self::Matriz(e.to_string())
    }
}
