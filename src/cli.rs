//! Command-line interface for pysummary.

use clap::Parser;
use std::path::PathBuf;

use crate::parser;
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Summarize the structure of a Python source file.
///
/// Prints a JSON record of the file's imports, its classes with their
/// methods, and its top-level functions. A nonexistent input file is
/// reported as a diagnostic line and exits successfully; malformed
/// Python is a fatal error.
#[derive(Parser)]
#[command(name = "pysummary")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Python file to summarize
    pub path: PathBuf,
}

/// Run the summarizer for the given arguments.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    parser::init();

    report::run(&cli.path, std::io::stdout().lock())?;
    Ok(EXIT_SUCCESS)
}
