//! Unit tests for the ingestion engine and the per-entity grammars

mod route_tests;

use super::engine::{IngestResult, IngestionEngine};
use super::{AirlineGrammar, AirportGrammar, RouteGrammar};
use crate::app::models::{Airline, Airport, Route};
use crate::config::IngestionConfig;

/// Run the airport engine over string literals with the default config
pub(crate) fn run_airports(lines: &[&str], existing: Vec<Airport>) -> IngestResult<Airport> {
    let grammar = AirportGrammar::new().unwrap();
    let engine = IngestionEngine::new(grammar, &IngestionConfig::default()).with_existing(existing);
    engine.run(&to_owned(lines))
}

/// Run the airline engine over string literals with the default config
pub(crate) fn run_airlines(lines: &[&str], existing: Vec<Airline>) -> IngestResult<Airline> {
    let grammar = AirlineGrammar::new().unwrap();
    let engine = IngestionEngine::new(grammar, &IngestionConfig::default()).with_existing(existing);
    engine.run(&to_owned(lines))
}

/// Run the route engine over string literals with the default config
pub(crate) fn run_routes(lines: &[&str], existing: Vec<Route>) -> IngestResult<Route> {
    let grammar = RouteGrammar::new().unwrap();
    let engine = IngestionEngine::new(grammar, &IngestionConfig::default()).with_existing(existing);
    engine.run(&to_owned(lines))
}

pub(crate) fn to_owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}
