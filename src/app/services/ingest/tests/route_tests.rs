//! Route grammar tests

use super::run_routes;
use crate::app::services::ingest::engine::{IngestOutcome, RowError};
use crate::app::services::ingest::route::RouteError;

const AER_KZN: &str = "2B,410,AER,2965,KZN,2990,,0,CR2";

/// Build a 9-field route line with one field replaced
fn line_with(index: usize, value: &str) -> String {
    let mut fields: Vec<String> = vec![
        "BA".into(),
        "1355".into(),
        "SIN".into(),
        "3316".into(),
        "LHR".into(),
        "507".into(),
        "".into(),
        "0".into(),
        "744 777".into(),
    ];
    fields[index] = value.to_string();
    fields.join(",")
}

#[test]
fn test_aer_kzn_scenario() {
    let result = run_routes(&[AER_KZN], Vec::new());

    assert_eq!(result.outcome, IngestOutcome::Accepted);
    assert_eq!(result.accepted, 1);
    assert!(result.tally.is_empty());

    let route = &result.records[0];
    assert_eq!(route.airline_code, "2B");
    assert_eq!(route.airline_id, 410);
    assert_eq!(route.natural_key(), (410, 2965, 2990));
    assert!(!route.codeshare);
    assert_eq!(route.stops, 0);
    assert_eq!(route.equipment, vec!["CR2"]);
}

#[test]
fn test_resubmission_against_first_runs_output_is_duplicate() {
    let first = run_routes(&[AER_KZN], Vec::new());
    assert_eq!(first.accepted, 1);

    let second = run_routes(&[AER_KZN], first.records);

    assert_eq!(second.outcome, IngestOutcome::SingleEntryRejected);
    assert_eq!(second.accepted, 0);
    assert_eq!(second.tally.count(RouteError::DuplicateRoute.code()), 1);
    assert_eq!(RouteError::DuplicateRoute.code(), 10);
}

#[test]
fn test_duplicate_within_run() {
    let result = run_routes(&[AER_KZN, AER_KZN], Vec::new());

    assert_eq!(result.accepted, 1);
    assert_eq!(result.tally.count(RouteError::DuplicateRoute.code()), 1);
}

#[test]
fn test_same_pair_under_other_airline_is_not_duplicate() {
    // Duplicate detection only consults the bucket of the route's own airline
    let other_airline = "M3,1210,AER,2965,KZN,2990,,0,CR2";
    let result = run_routes(&[AER_KZN, other_airline], Vec::new());

    assert_eq!(result.accepted, 2);
    assert!(result.tally.is_empty());
}

#[test]
fn test_airline_code_length() {
    let result = run_routes(&[&line_with(0, "BAWX")], Vec::new());
    assert_eq!(result.tally.count(RouteError::InvalidAirlineCode.code()), 1);

    let result = run_routes(&[&line_with(0, "B")], Vec::new());
    assert_eq!(result.tally.count(RouteError::InvalidAirlineCode.code()), 1);

    let result = run_routes(&[&line_with(0, "BAW")], Vec::new());
    assert_eq!(result.accepted, 1);
}

#[test]
fn test_null_ids_normalize_to_zero() {
    let line = line_with(1, "\\N");
    let result = run_routes(&[&line], Vec::new());

    assert_eq!(result.accepted, 1);
    assert_eq!(result.records[0].airline_id, 0);

    let line = line_with(3, "\\N");
    let result = run_routes(&[&line], Vec::new());
    assert_eq!(result.records[0].source_id, 0);
}

#[test]
fn test_id_digit_limit() {
    let result = run_routes(&[&line_with(1, "123456")], Vec::new());
    assert_eq!(result.tally.count(RouteError::InvalidAirlineId.code()), 1);

    let result = run_routes(&[&line_with(5, "123456")], Vec::new());
    assert_eq!(
        result.tally.count(RouteError::InvalidDestinationId.code()),
        1
    );
}

#[test]
fn test_airport_codes_must_be_uppercase() {
    let result = run_routes(&[&line_with(2, "sin")], Vec::new());
    assert_eq!(result.tally.count(RouteError::InvalidSourceCode.code()), 1);

    let result = run_routes(&[&line_with(4, "EGLL")], Vec::new());
    assert_eq!(result.accepted, 1);

    let result = run_routes(&[&line_with(4, "LONDO")], Vec::new());
    assert_eq!(
        result.tally.count(RouteError::InvalidDestinationCode.code()),
        1
    );
}

#[test]
fn test_codeshare_forms() {
    let result = run_routes(&[&line_with(6, "Y")], Vec::new());
    assert_eq!(result.accepted, 1);
    assert!(result.records[0].codeshare);

    let result = run_routes(&[&line_with(6, "N")], Vec::new());
    assert_eq!(result.tally.count(RouteError::InvalidCodeshare.code()), 1);
}

#[test]
fn test_stops_single_digit() {
    let result = run_routes(&[&line_with(7, "10")], Vec::new());
    assert_eq!(result.tally.count(RouteError::InvalidStops.code()), 1);

    let result = run_routes(&[&line_with(7, "9")], Vec::new());
    assert_eq!(result.records[0].stops, 9);
}

#[test]
fn test_equipment_list() {
    let result = run_routes(&[&line_with(8, "744 777 319")], Vec::new());
    assert_eq!(result.records[0].equipment, vec!["744", "777", "319"]);

    let result = run_routes(&[&line_with(8, "")], Vec::new());
    assert_eq!(result.tally.count(RouteError::InvalidEquipment.code()), 1);

    let result = run_routes(&[&line_with(8, "7444")], Vec::new());
    assert_eq!(result.tally.count(RouteError::InvalidEquipment.code()), 1);

    let result = run_routes(&[&line_with(8, "744  777")], Vec::new());
    assert_eq!(result.tally.count(RouteError::InvalidEquipment.code()), 1);
}

#[test]
fn test_validation_stops_at_first_failing_field() {
    // Bad airline code and bad stops: only the airline code registers
    let line = line_with(0, "TOOLONG").replace(",0,744", ",99,744");
    let result = run_routes(&[&line], Vec::new());

    assert_eq!(result.tally.count(RouteError::InvalidAirlineCode.code()), 1);
    assert_eq!(result.tally.total(), 1);
}
