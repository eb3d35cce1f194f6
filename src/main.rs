//! JSONCMP command-line interface.
//!
//! Compares two JSON files and prints a path-qualified mismatch report.
//! Exit code 0 means the documents are equivalent, 1 means mismatches were
//! found, 2 means a file could not be read or parsed.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use jsoncmp_rs::{compare, format_report, parser, ComparatorOptions, ReportFormat, ReportOptions};
use std::path::PathBuf;
use std::process;

/// JSONCMP - Structural JSON comparison
///
/// Compares an actual JSON document against an expected one, reporting every
/// mismatch with its dotted/bracketed path. Key order and formatting never
/// count as differences; array order does.
#[derive(Parser)]
#[command(name = "jsoncmp")]
#[command(version)]
#[command(about = "Structural JSON comparison for test suites", long_about = None)]
struct Cli {
    /// JSON document produced by the code under test
    #[arg(value_name = "ACTUAL")]
    actual: PathBuf,

    /// JSON document describing the expected content
    #[arg(value_name = "EXPECTED")]
    expected: PathBuf,

    /// Fully qualified entry path to exclude from comparison (repeatable)
    #[arg(short, long = "ignore", value_name = "PATH")]
    ignore: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "terminal")]
    format: ReportFormatArg,

    /// Suppress the trailing summary line
    #[arg(short, long)]
    quiet: bool,

    /// Verbose output (show progress on stderr)
    #[arg(short, long)]
    verbose: bool,
}

/// Report format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum ReportFormatArg {
    /// Colored terminal output
    Terminal,
    /// JSON representation
    Json,
    /// Plain text (no colors)
    Plain,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(arg: ReportFormatArg) -> Self {
        match arg {
            ReportFormatArg::Terminal => ReportFormat::Terminal,
            ReportFormatArg::Json => ReportFormat::Json,
            ReportFormatArg::Plain => ReportFormat::Plain,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    if cli.verbose {
        eprintln!("Reading {}...", cli.actual.display());
    }

    let actual = parser::read_file(&cli.actual)
        .with_context(|| format!("Failed to read actual document: {}", cli.actual.display()))?;

    if cli.verbose {
        eprintln!("Reading {}...", cli.expected.display());
    }

    let expected = parser::read_file(&cli.expected).with_context(|| {
        format!(
            "Failed to read expected document: {}",
            cli.expected.display()
        )
    })?;

    if cli.verbose {
        eprintln!("Comparing...");
    }

    let options = ComparatorOptions::new().ignore_keys(cli.ignore);
    let errors = compare(&actual, &expected, &options).context("Comparison failed")?;

    let report_options = ReportOptions {
        summary: !cli.quiet,
    };
    let format: ReportFormat = cli.format.into();
    let output =
        format_report(&errors, &format, &report_options).context("Failed to format report")?;

    println!("{}", output);

    if errors.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format_conversion() {
        assert_eq!(
            ReportFormat::from(ReportFormatArg::Terminal),
            ReportFormat::Terminal
        );
        assert_eq!(ReportFormat::from(ReportFormatArg::Json), ReportFormat::Json);
        assert_eq!(
            ReportFormat::from(ReportFormatArg::Plain),
            ReportFormat::Plain
        );
    }
}
