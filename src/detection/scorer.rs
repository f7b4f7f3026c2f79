//! Synonym-aware tuple scoring.
//!
//! Every base tuple is compared against every comparison tuple. A pair matches
//! when each position holds either the same word, or a comparison word that is
//! in the synonym group of the base word. Only the base word is ever used as a
//! synonym key, so swapping the documents can change the score.
//!
//! The ratio is the total number of matching pairs over the number of base
//! tuples. A base tuple that matches several comparison tuples counts each of
//! them, so the ratio can exceed 1.
//!
//! # Examples
//!
//! ```
//! use plagiarism_detector::analysis::synonym::dictionary::SynonymIndex;
//! use plagiarism_detector::analysis::tuple::TupleBuilder;
//! use plagiarism_detector::detection::scorer::calculate_plagiarism;
//!
//! let index = SynonymIndex::from_groups([vec!["happy", "glad", "joyful"]]);
//! let builder = TupleBuilder::new(2).unwrap();
//! let base = builder.build_text("I am happy today").unwrap();
//! let comparison = builder.build_text("I am glad today").unwrap();
//!
//! assert_eq!(calculate_plagiarism(&index, &base, &comparison), 1.0);
//! ```

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::synonym::dictionary::SynonymIndex;
use crate::analysis::tuple::{Tuple, TupleList};

/// Whether `comparison` matches `base` position by position.
///
/// Tuples of different lengths never match.
pub fn tuple_matches(index: &SynonymIndex, base: &Tuple, comparison: &Tuple) -> bool {
    if base.len() != comparison.len() {
        return false;
    }

    base.words()
        .iter()
        .zip(comparison.words())
        .all(|(b, c)| b == c || index.is_synonym(b, c))
}

/// Number of comparison tuples that match one base tuple.
pub fn count_matches(index: &SynonymIndex, base: &Tuple, comparison: &TupleList) -> usize {
    comparison
        .iter()
        .filter(|c| tuple_matches(index, base, c))
        .count()
}

fn ratio(matches: usize, base_tuples: usize) -> f64 {
    if base_tuples == 0 {
        return 0.0;
    }
    matches as f64 / base_tuples as f64
}

fn total_matches(index: &SynonymIndex, base: &TupleList, comparison: &TupleList) -> usize {
    base.iter().map(|b| count_matches(index, b, comparison)).sum()
}

fn total_matches_parallel(index: &SynonymIndex, base: &TupleList, comparison: &TupleList) -> usize {
    base.tuples()
        .par_iter()
        .map(|b| count_matches(index, b, comparison))
        .sum()
}

/// Matching pairs divided by base tuples; 0 when the base has no tuples.
pub fn calculate_plagiarism(index: &SynonymIndex, base: &TupleList, comparison: &TupleList) -> f64 {
    ratio(total_matches(index, base, comparison), base.len())
}

/// Same result as [`calculate_plagiarism`], scoring base tuples on the rayon pool.
pub fn calculate_plagiarism_parallel(
    index: &SynonymIndex,
    base: &TupleList,
    comparison: &TupleList,
) -> f64 {
    ratio(total_matches_parallel(index, base, comparison), base.len())
}

/// Outcome of scoring two documents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Matching pairs over base tuples.
    pub ratio: f64,
    /// Total matching (base, comparison) pairs.
    pub matched_pairs: usize,
    pub base_tuples: usize,
    pub comparison_tuples: usize,
}

/// Scores tuple lists against a fixed synonym index.
#[derive(Debug, Clone)]
pub struct PlagiarismScorer {
    index: SynonymIndex,
    parallel: bool,
}

impl PlagiarismScorer {
    pub fn new(index: SynonymIndex) -> Self {
        PlagiarismScorer {
            index,
            parallel: false,
        }
    }

    /// Score base tuples on the rayon thread pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn index(&self) -> &SynonymIndex {
        &self.index
    }

    pub fn score(&self, base: &TupleList, comparison: &TupleList) -> ScoreResult {
        info!(
            "Calculating the plagiarism of {} base tuples against {} comparison tuples",
            base.len(),
            comparison.len()
        );

        let matched_pairs = if self.parallel {
            total_matches_parallel(&self.index, base, comparison)
        } else {
            total_matches(&self.index, base, comparison)
        };
        let result = ScoreResult {
            ratio: ratio(matched_pairs, base.len()),
            matched_pairs,
            base_tuples: base.len(),
            comparison_tuples: comparison.len(),
        };

        debug!("Score: {result:?}");
        result
    }
}
