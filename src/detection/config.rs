//! Configuration for a single detection run.

use std::path::PathBuf;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{PlagiarismError, Result};

/// Tuple size used when none is given.
pub const DEFAULT_TUPLE_SIZE: usize = 3;

/// Everything a detection run needs, validated up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Synonym file, one group per line.
    pub synonyms_path: PathBuf,

    /// Document plagiarism is measured against.
    pub base_path: PathBuf,

    /// Document checked for overlap with the base.
    pub comparison_path: PathBuf,

    /// Number of words per tuple (at least 1).
    pub tuple_size: usize,

    /// Score base tuples on the rayon thread pool.
    pub parallel: bool,
}

impl DetectionConfig {
    /// Create a sequential configuration.
    pub fn new<P1, P2, P3>(synonyms_path: P1, base_path: P2, comparison_path: P3, tuple_size: usize) -> Self
    where
        P1: Into<PathBuf>,
        P2: Into<PathBuf>,
        P3: Into<PathBuf>,
    {
        DetectionConfig {
            synonyms_path: synonyms_path.into(),
            base_path: base_path.into(),
            comparison_path: comparison_path.into(),
            tuple_size,
            parallel: false,
        }
    }

    /// Toggle parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Resolve the optional tuple-size argument.
///
/// A missing value falls back to [`DEFAULT_TUPLE_SIZE`] with a warning. Anything
/// that is not a positive integer is rejected, including values padded with
/// whitespace.
pub fn parse_tuple_size(raw: Option<&str>) -> Result<usize> {
    let Some(raw) = raw else {
        warn!("Tuple size not specified, setting it to {DEFAULT_TUPLE_SIZE}");
        return Ok(DEFAULT_TUPLE_SIZE);
    };

    let size: i64 = raw
        .parse()
        .map_err(|_| PlagiarismError::invalid_tuple_size(format!("'{raw}' is not an integer")))?;
    if size < 1 {
        return Err(PlagiarismError::invalid_tuple_size(format!(
            "{size} must be at least 1"
        )));
    }

    info!("Setting the tuple size to the user specified tuple size {size}");
    usize::try_from(size)
        .map_err(|_| PlagiarismError::invalid_tuple_size(format!("{size} is too large")))
}
