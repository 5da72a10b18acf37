//! Command-line argument definitions for the flight data ingestor
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the flight data ingestor
///
/// Validates airport, airline, and route reference data supplied as
/// comma-separated text and reports every rejected line with a stable
/// error code.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flightdata-ingestor",
    version,
    about = "Validate and ingest airport, airline, and route reference data",
    long_about = "Ingests line-oriented, comma-separated flight reference data. Every field of \
                  every record is validated against entity-specific rules, duplicates are \
                  detected against already-accepted data, and whole files are accepted, \
                  partially accepted with a report, or rejected outright when too many lines \
                  contain errors."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the flight data ingestor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Validate a file and ingest its accepted records
    Load(FileArgs),
    /// Validate a file without ingesting anything (dry run)
    Check(FileArgs),
    /// Validate and ingest a single comma-separated entry
    Entry(EntryArgs),
}

/// Arguments for the file-based commands (load and check)
#[derive(Debug, Clone, Parser)]
pub struct FileArgs {
    /// Path to the data file to validate
    #[arg(value_name = "FILE", help = "Path to the data file")]
    pub file: PathBuf,

    /// Entity kind the file contains
    ///
    /// One of: airport, airline, route. Any other value fails with an
    /// unknown entity kind error.
    #[arg(
        short = 'k',
        long = "kind",
        value_name = "KIND",
        help = "Entity kind: airport, airline, or route"
    )]
    pub kind: String,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the single-entry command
#[derive(Debug, Clone, Parser)]
pub struct EntryArgs {
    /// The raw comma-separated entry to validate
    #[arg(value_name = "LINE", help = "One comma-separated data row")]
    pub line: String,

    /// Entity kind the entry describes
    #[arg(
        short = 'k',
        long = "kind",
        value_name = "KIND",
        help = "Entity kind: airport, airline, or route"
    )]
    pub kind: String,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl FileArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show a progress spinner (not in quiet or JSON mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

impl EntryArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_mapping() {
        let mut args = FileArgs {
            file: PathBuf::from("airports.csv"),
            kind: "airport".to_string(),
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        };

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_progress_hidden_for_json_output() {
        let args = FileArgs {
            file: PathBuf::from("airports.csv"),
            kind: "airport".to_string(),
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Json,
        };
        assert!(!args.show_progress());
    }

    #[test]
    fn test_args_parse_load_command() {
        let args =
            Args::try_parse_from(["flightdata-ingestor", "load", "data.csv", "--kind", "route"])
                .unwrap();

        match args.command {
            Some(Commands::Load(file_args)) => {
                assert_eq!(file_args.file, PathBuf::from("data.csv"));
                assert_eq!(file_args.kind, "route");
            }
            other => panic!("Expected load command, got {:?}", other),
        }
    }
}
