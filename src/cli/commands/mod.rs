//! Command implementations for the flight data ingestor CLI

pub mod entry;
pub mod load;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch the parsed arguments to the selected command
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Load(file_args)) => load::run_load(file_args),
        Some(Commands::Check(file_args)) => load::run_check(file_args),
        Some(Commands::Entry(entry_args)) => entry::run_entry(entry_args),
        None => Ok(()),
    }
}
