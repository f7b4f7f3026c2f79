//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Detect plagiarism between two text files using synonym-aware word tuples
#[derive(Parser, Debug, Clone)]
#[command(name = "plagiarism-detector")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PlagiarismArgs {
    /// Synonym file: one whitespace-separated group of synonyms per line
    #[arg(value_name = "SYNONYMS_FILE")]
    pub synonyms_file: PathBuf,

    /// File plagiarism is measured against
    #[arg(value_name = "BASE_FILE")]
    pub base_file: PathBuf,

    /// File checked for overlap with the base file
    #[arg(value_name = "COMPARISON_FILE")]
    pub comparison_file: PathBuf,

    /// Number of words per tuple (default: 3)
    #[arg(value_name = "TUPLE_SIZE", allow_negative_numbers = true)]
    pub tuple_size: Option<String>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Score base tuples in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl PlagiarismArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The single result line
    Human,
    /// The full report as JSON
    Json,
}
