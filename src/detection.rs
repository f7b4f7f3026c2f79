//! Plagiarism detection between a base and a comparison document.
//!
//! A run reads the synonym file, then the base file, then the comparison file,
//! and stops at the first one that cannot be read. The two documents are
//! turned into tuple lists of the configured size and scored with
//! [`scorer::PlagiarismScorer`].

pub mod config;
pub mod report;
pub mod scorer;

use log::info;

use crate::analysis::synonym::dictionary::SynonymIndex;
use crate::analysis::tuple::TupleBuilder;
use crate::error::{InputRole, Result};

use self::config::DetectionConfig;
use self::report::PlagiarismReport;
use self::scorer::PlagiarismScorer;

/// Run a full detection as described by `config`.
pub fn detect(config: &DetectionConfig) -> Result<PlagiarismReport> {
    let index = SynonymIndex::load_from_file(&config.synonyms_path)?;

    let builder = TupleBuilder::new(config.tuple_size)?;
    let base = builder.load_from_file(&config.base_path, InputRole::Base)?;
    let comparison = builder.load_from_file(&config.comparison_path, InputRole::Comparison)?;

    let score = PlagiarismScorer::new(index)
        .parallel(config.parallel)
        .score(&base, &comparison);
    let report = PlagiarismReport::new(score, config.tuple_size);

    info!(
        "{} matching pairs over {} base tuples",
        report.matched_pairs, report.base_tuples
    );
    Ok(report)
}
