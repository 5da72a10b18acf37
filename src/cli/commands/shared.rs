//! Shared components for CLI commands
//!
//! Logging setup and report rendering used by all command implementations.

use colored::Colorize;
use tracing::debug;

use crate::Result;
use crate::cli::args::OutputFormat;

/// Set up structured logging from the command's verbosity flags
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flightdata_ingestor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print a successful run's report in the requested format
pub fn print_report(
    format: &OutputFormat,
    operation: &str,
    kind: &str,
    source: &str,
    report: &str,
) {
    match format {
        OutputFormat::Human => {
            println!(
                "{} {} of {} data from '{}'",
                "OK".green().bold(),
                operation,
                kind,
                source
            );
            for line in report.lines() {
                if line.starts_with("Error [") {
                    println!("   {}", line.yellow());
                } else {
                    println!("   {}", line);
                }
            }
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "status": "accepted",
                "operation": operation,
                "kind": kind,
                "source": source,
                "report": report,
            });
            println!("{}", value);
        }
    }
}
