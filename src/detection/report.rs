//! Reporting a score as a percentage.

use serde::{Deserialize, Serialize};

use crate::detection::scorer::ScoreResult;

/// Format `ratio * 100` with at most two decimals and no trailing zeros.
///
/// ```
/// use plagiarism_detector::detection::report::format_percentage;
///
/// assert_eq!(format_percentage(1.0), "100");
/// assert_eq!(format_percentage(1.0 / 3.0), "33.33");
/// assert_eq!(format_percentage(0.125), "12.5");
/// ```
pub fn format_percentage(ratio: f64) -> String {
    let formatted = format!("{:.2}", ratio * 100.0);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// The result of one detection run, ready for output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlagiarismReport {
    /// Formatted percentage, e.g. `"33.33"`.
    pub percentage: String,
    pub ratio: f64,
    pub matched_pairs: usize,
    pub base_tuples: usize,
    pub comparison_tuples: usize,
    pub tuple_size: usize,
}

impl PlagiarismReport {
    pub fn new(score: ScoreResult, tuple_size: usize) -> Self {
        PlagiarismReport {
            percentage: format_percentage(score.ratio),
            ratio: score.ratio,
            matched_pairs: score.matched_pairs,
            base_tuples: score.base_tuples,
            comparison_tuples: score.comparison_tuples,
            tuple_size,
        }
    }

    /// The single line printed on success.
    pub fn message(&self) -> String {
        format!("The plagiarism detected is {}%", self.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0), "0");
        assert_eq!(format_percentage(1.0), "100");
        assert_eq!(format_percentage(0.33), "33");
        assert_eq!(format_percentage(1.0 / 3.0), "33.33");
        assert_eq!(format_percentage(2.0 / 3.0), "66.67");
        assert_eq!(format_percentage(0.5), "50");
        assert_eq!(format_percentage(0.125), "12.5");
        assert_eq!(format_percentage(3.0), "300");
        assert_eq!(format_percentage(0.00001), "0");
    }

    #[test]
    fn test_report_message() {
        let score = ScoreResult {
            ratio: 1.0,
            matched_pairs: 3,
            base_tuples: 3,
            comparison_tuples: 3,
        };
        let report = PlagiarismReport::new(score, 2);

        assert_eq!(report.percentage, "100");
        assert_eq!(report.tuple_size, 2);
        assert_eq!(report.message(), "The plagiarism detected is 100%");
    }

    #[test]
    fn test_report_serializes() {
        let score = ScoreResult {
            ratio: 0.5,
            matched_pairs: 1,
            base_tuples: 2,
            comparison_tuples: 4,
        };
        let json = serde_json::to_value(PlagiarismReport::new(score, 3)).unwrap();

        assert_eq!(json["percentage"], "50");
        assert_eq!(json["matched_pairs"], 1);
        assert_eq!(json["tuple_size"], 3);
    }
}
