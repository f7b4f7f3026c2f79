//! Plagiarism detector CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, error};

use plagiarism_detector::cli::args::*;
use plagiarism_detector::cli::commands::*;

fn main() {
    // Wrong argument counts exit here with clap's usage message
    let args = PlagiarismArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        error!("{e}");
        process::exit(1);
    }
}
