//! Load and check command implementations
//!
//! Both commands run the full validation pipeline over one file; load
//! additionally ingests the accepted records into storage, check is a
//! pre-flight dry run.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::shared::{print_report, setup_logging};
use crate::Result;
use crate::app::adapters::storage::InMemoryStorage;
use crate::app::services::loader::Loader;
use crate::cli::args::FileArgs;
use crate::config::IngestionConfig;

/// Validate a file and ingest its accepted records
pub fn run_load(args: FileArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    info!("Loading {} data from {}", args.kind, args.file.display());

    let progress_bar = spinner(&args, "Validating...");

    let mut loader = Loader::new(InMemoryStorage::new(), IngestionConfig::default())?;
    let result = loader.load_file(&args.file, &args.kind);

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    let report = result?;
    print_report(
        &args.output_format,
        "load",
        &args.kind,
        &args.file.display().to_string(),
        &report,
    );
    Ok(())
}

/// Validate a file without ingesting anything
pub fn run_check(args: FileArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    info!("Checking {} data in {}", args.kind, args.file.display());

    let progress_bar = spinner(&args, "Checking...");

    let loader = Loader::new(InMemoryStorage::new(), IngestionConfig::default())?;
    let result = loader.check_file(&args.file, &args.kind);

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    let report = result?;
    print_report(
        &args.output_format,
        "check",
        &args.kind,
        &args.file.display().to_string(),
        &report,
    );
    Ok(())
}

fn spinner(args: &FileArgs, message: &'static str) -> Option<ProgressBar> {
    if !args.show_progress() {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Some(pb)
}
