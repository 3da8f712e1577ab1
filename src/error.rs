//! Error types and handling for intmerge
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Malformed or missing data inside an open input is not an error anywhere in
//! this crate: the merge treats it as stream exhaustion. The variants here
//! cover the only hard failures, which are at the file boundary.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for intmerge operations
#[derive(Error, Diagnostic, Debug)]
pub enum IntmergeError {
    #[error("Could not open {path} for reading: {reason}")]
    #[diagnostic(
        code(intmerge::fs::open_failed),
        help("Check that the input file exists and is readable")
    )]
    InputOpenFailed { path: String, reason: String },

    #[error("Could not open {path} for writing: {reason}")]
    #[diagnostic(
        code(intmerge::fs::create_failed),
        help("Check that the parent directory exists and is writable")
    )]
    OutputCreateFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(intmerge::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for IntmergeError {
    fn from(err: std::io::Error) -> Self {
        IntmergeError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, IntmergeError>;
