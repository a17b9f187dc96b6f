//! Error types and handling for pkgcopy
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pkgcopy operations
#[derive(Error, Diagnostic, Debug)]
pub enum PkgcopyError {
    // Job errors
    #[error("Job file not found: {path}")]
    #[diagnostic(
        code(pkgcopy::job::not_found),
        help("Pass a source pattern directly or point --job at an existing file")
    )]
    JobNotFound { path: String },

    #[error("Failed to parse job file: {path}")]
    #[diagnostic(code(pkgcopy::job::parse_failed))]
    JobParseFailed { path: String, reason: String },

    #[error("Invalid job: {message}")]
    #[diagnostic(
        code(pkgcopy::job::invalid),
        help("A job needs source_pkg, plus pkg_path or cache_dir for the destination")
    )]
    JobInvalid { message: String },

    // Source resolution errors
    #[error("Invalid source pattern '{pattern}': {reason}")]
    #[diagnostic(code(pkgcopy::source::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    #[error("No package matches source pattern: {pattern}")]
    #[diagnostic(
        code(pkgcopy::source::not_found),
        help("Check that the pattern matches an existing package file")
    )]
    SourceNotFound { pattern: String },

    // Copy errors
    #[error("Failed to copy {src} to {dest}: {reason}")]
    #[diagnostic(
        code(pkgcopy::copy::failed),
        help("Check permissions and that the destination directory exists")
    )]
    CopyFailed {
        src: String,
        dest: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(pkgcopy::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PkgcopyError {
    fn from(err: std::io::Error) -> Self {
        PkgcopyError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PkgcopyError {
    fn from(err: serde_yaml::Error) -> Self {
        PkgcopyError::JobParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PkgcopyError {
    fn from(err: serde_json::Error) -> Self {
        PkgcopyError::JobParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PkgcopyError>;
