//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, PlagiarismArgs};
use crate::detection::report::PlagiarismReport;
use crate::error::Result;

/// Render a report in the requested format.
pub fn render_report(report: &PlagiarismReport, args: &PlagiarismArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(report.message()),
        OutputFormat::Json => render_json(report, args.pretty),
    }
}

fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Print a report to stdout.
pub fn output_report(report: &PlagiarismReport, args: &PlagiarismArgs) -> Result<()> {
    println!("{}", render_report(report, args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::detection::scorer::ScoreResult;

    fn report() -> PlagiarismReport {
        PlagiarismReport::new(
            ScoreResult {
                ratio: 1.0 / 3.0,
                matched_pairs: 1,
                base_tuples: 3,
                comparison_tuples: 2,
            },
            3,
        )
    }

    #[test]
    fn test_human_output() {
        let args = PlagiarismArgs::try_parse_from(["plagiarism-detector", "s", "a", "b"]).unwrap();
        assert_eq!(
            render_report(&report(), &args).unwrap(),
            "The plagiarism detected is 33.33%"
        );
    }

    #[test]
    fn test_json_output() {
        let args =
            PlagiarismArgs::try_parse_from(["plagiarism-detector", "-f", "json", "s", "a", "b"])
                .unwrap();
        let rendered = render_report(&report(), &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["percentage"], "33.33");
        assert_eq!(value["base_tuples"], 3);
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn test_pretty_json_output() {
        let args = PlagiarismArgs::try_parse_from([
            "plagiarism-detector",
            "-f",
            "json",
            "--pretty",
            "s",
            "a",
            "b",
        ])
        .unwrap();
        assert!(render_report(&report(), &args).unwrap().contains('\n'));
    }
}
