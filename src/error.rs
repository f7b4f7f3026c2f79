//! Error types for the plagiarism detector.
//!
//! Every fallible operation in the library returns [`Result`], whose error side is
//! [`PlagiarismError`]. Nothing below the binary's `main` terminates the process;
//! errors travel up to the CLI boundary, which logs them and picks the exit status.
//!
//! # Examples
//!
//! ```
//! use plagiarism_detector::error::{PlagiarismError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PlagiarismError::invalid_argument("tuple size must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Which input file an I/O failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    /// The synonym dictionary.
    Synonyms,
    /// The document plagiarism is measured against.
    Base,
    /// The document checked for overlap.
    Comparison,
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputRole::Synonyms => write!(f, "synonyms"),
            InputRole::Base => write!(f, "base"),
            InputRole::Comparison => write!(f, "comparison"),
        }
    }
}

/// The main error type for plagiarism detection.
#[derive(Error, Debug)]
pub enum PlagiarismError {
    /// I/O errors not tied to opening a named input
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An input file could not be opened or read
    #[error("The {role} file '{}' could not be read: {source}", .path.display())]
    FileNotFound {
        role: InputRole,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The tuple size argument is not a positive integer
    #[error("Invalid tuple size: {0}")]
    InvalidTupleSize(String),

    /// Invalid argument passed to a library call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Analysis-related errors (tokenization patterns and the like)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with PlagiarismError.
pub type Result<T> = std::result::Result<T, PlagiarismError>;

impl PlagiarismError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PlagiarismError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PlagiarismError::InvalidArgument(msg.into())
    }

    /// Create a new invalid tuple size error.
    pub fn invalid_tuple_size<S: Into<String>>(msg: S) -> Self {
        PlagiarismError::InvalidTupleSize(msg.into())
    }

    /// Wrap an I/O failure on one of the input files.
    pub fn file_not_found<P: AsRef<Path>>(role: InputRole, path: P, source: io::Error) -> Self {
        PlagiarismError::FileNotFound {
            role,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
