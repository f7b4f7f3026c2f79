//! Command implementation for the plagiarism detector CLI.

use log::debug;

use crate::cli::args::PlagiarismArgs;
use crate::cli::output::output_report;
use crate::detection::config::{DetectionConfig, parse_tuple_size};
use crate::detection::detect;
use crate::error::Result;

/// Turn parsed arguments into a validated configuration.
pub fn build_config(args: &PlagiarismArgs) -> Result<DetectionConfig> {
    let tuple_size = parse_tuple_size(args.tuple_size.as_deref())?;
    Ok(DetectionConfig::new(
        &args.synonyms_file,
        &args.base_file,
        &args.comparison_file,
        tuple_size,
    )
    .with_parallel(args.parallel))
}

/// Execute a CLI invocation.
///
/// Nothing is written to stdout unless the whole run succeeds.
pub fn execute_command(args: PlagiarismArgs) -> Result<()> {
    let config = build_config(&args)?;
    debug!("Running detection with {config:?}");

    let report = detect(&config)?;
    output_report(&report, &args)
}
