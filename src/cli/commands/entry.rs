//! Single-entry command implementation
//!
//! Validates one raw comma-separated row and ingests it into the reserved
//! single-entry file for its kind.

use tracing::info;

use super::shared::{print_report, setup_logging};
use crate::Result;
use crate::app::adapters::storage::InMemoryStorage;
use crate::app::services::loader::Loader;
use crate::cli::args::EntryArgs;
use crate::config::IngestionConfig;

/// Validate and ingest a single entry
pub fn run_entry(args: EntryArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    info!("Validating single {} entry", args.kind);

    let mut loader = Loader::new(InMemoryStorage::new(), IngestionConfig::default())?;
    let report = loader.load_line(&args.line, &args.kind)?;

    print_report(&args.output_format, "entry", &args.kind, &args.line, &report);
    Ok(())
}
