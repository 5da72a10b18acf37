//! Ingestion engine for flight reference data
//!
//! This module implements the validation pipeline that turns raw comma-separated
//! lines into validated record sets: row-shape checks, per-field grammars,
//! incremental duplicate detection, error accounting, and the file-level
//! acceptance policy.
//!
//! One run is a pure function of the input lines and the optional pre-existing
//! records: the engine is consumed by [`IngestionEngine::run`] and returns an
//! owned [`IngestResult`]; no state survives between runs.

pub mod airline;
pub mod airport;
pub mod engine;
pub mod line;
pub mod route;
pub mod tally;

#[cfg(test)]
mod tests;

// Re-export key types for convenience
pub use airline::{AirlineError, AirlineGrammar};
pub use airport::{AirportError, AirportGrammar};
pub use engine::{IngestOutcome, IngestResult, IngestionEngine, RowError, RowGrammar};
pub use route::{RouteError, RouteGrammar};
pub use tally::ErrorTally;

/// Compile one field rule, surfacing a bad pattern as a configuration error
pub(crate) fn compile_rule(pattern: &str) -> crate::Result<regex::Regex> {
    regex::Regex::new(pattern).map_err(|e| {
        crate::Error::configuration(format!("Invalid field rule '{}': {}", pattern, e))
    })
}
