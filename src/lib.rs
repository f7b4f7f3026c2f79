//! # Plagiarism Detector
//!
//! Approximate plagiarism detection between two text documents using
//! synonym-aware word tuples.
//!
//! ## Overview
//!
//! - Each line is split into words (runs of word characters and apostrophes)
//! - Words are grouped into overlapping fixed-size tuples, never across lines
//! - A synonym file defines groups of interchangeable words
//! - Every base tuple is compared with every comparison tuple; the score is
//!   the number of matching pairs over the number of base tuples
//!
//! ```
//! use plagiarism_detector::analysis::synonym::dictionary::SynonymIndex;
//! use plagiarism_detector::analysis::tuple::TupleBuilder;
//! use plagiarism_detector::detection::report::format_percentage;
//! use plagiarism_detector::detection::scorer::PlagiarismScorer;
//!
//! let scorer = PlagiarismScorer::new(SynonymIndex::from_groups([vec!["run", "jog"]]));
//! let builder = TupleBuilder::new(2).unwrap();
//! let base = builder.build_text("go for a run").unwrap();
//! let comparison = builder.build_text("go for a jog").unwrap();
//!
//! let result = scorer.score(&base, &comparison);
//! assert_eq!(format_percentage(result.ratio), "100");
//! ```

pub mod analysis;
pub mod cli;
pub mod detection;
pub mod error;

pub mod prelude {
    pub use crate::analysis::synonym::dictionary::SynonymIndex;
    pub use crate::analysis::tuple::{Tuple, TupleBuilder, TupleList};
    pub use crate::detection::config::DetectionConfig;
    pub use crate::detection::detect;
    pub use crate::detection::report::PlagiarismReport;
    pub use crate::detection::scorer::{PlagiarismScorer, ScoreResult};
    pub use crate::error::{PlagiarismError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
