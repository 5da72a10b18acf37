//! Route row grammar
//!
//! Validates the 9-column route row and tracks the (airline, source,
//! destination) natural key. Keys are bucketed per airline ID so a duplicate
//! check only compares against routes flown by the same airline.

use regex::Regex;
use std::collections::{HashMap, HashSet};

use super::compile_rule;
use super::engine::{RowError, RowGrammar};
use crate::Result;
use crate::app::models::Route;
use crate::constants::{NULL_SENTINEL, ROUTE_COLUMN_COUNT, ROUTE_ID_MAX_DIGITS, route_errors};

/// Route validation failure kinds, discriminants are the report codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    WrongFieldCount = 0,
    InvalidAirlineCode = 1,
    InvalidAirlineId = 2,
    InvalidSourceCode = 3,
    InvalidSourceId = 4,
    InvalidDestinationCode = 5,
    InvalidDestinationId = 6,
    InvalidCodeshare = 7,
    InvalidStops = 8,
    InvalidEquipment = 9,
    DuplicateRoute = 10,
    Unknown = 11,
}

impl RowError for RouteError {
    fn code(self) -> usize {
        self as usize
    }

    fn message(self) -> &'static str {
        route_errors::MESSAGES[self.code()]
    }
}

/// Grammar for route rows
#[derive(Debug)]
pub struct RouteGrammar {
    airline_code_rule: Regex,
    airport_code_rule: Regex,
    id_rule: Regex,
    stops_rule: Regex,
    equipment_rule: Regex,

    /// (source, destination) pairs seen so far, bucketed by airline ID
    by_airline: HashMap<u32, HashSet<(u32, u32)>>,
}

impl RouteGrammar {
    /// Create a grammar with freshly compiled field rules
    pub fn new() -> Result<Self> {
        Ok(Self {
            airline_code_rule: compile_rule(r"^[A-Za-z0-9]{2,3}$")?,
            airport_code_rule: compile_rule(r"^[A-Z]{3,4}$")?,
            id_rule: compile_rule(&format!(r"^[0-9]{{1,{}}}$", ROUTE_ID_MAX_DIGITS))?,
            stops_rule: compile_rule(r"^[0-9]$")?,
            equipment_rule: compile_rule(r"^[A-Za-z0-9]{3}( [A-Za-z0-9]{3})*$")?,
            by_airline: HashMap::new(),
        })
    }

    /// Validate an airline/airport ID field, normalizing the null sentinel
    /// to 0 before the digit-count rule is applied
    fn parse_id(&self, field: &str, error: RouteError) -> std::result::Result<u32, RouteError> {
        let normalized = if field == NULL_SENTINEL { "0" } else { field };
        if !self.id_rule.is_match(normalized) {
            return Err(error);
        }
        normalized.parse().map_err(|_| RouteError::Unknown)
    }
}

impl RowGrammar for RouteGrammar {
    type Record = Route;
    type Error = RouteError;

    fn column_count(&self) -> usize {
        ROUTE_COLUMN_COUNT
    }

    fn messages(&self) -> &'static [&'static str] {
        route_errors::MESSAGES
    }

    fn wrong_field_count(&self) -> RouteError {
        RouteError::WrongFieldCount
    }

    fn seed(&mut self, existing: &[Route]) {
        for route in existing {
            let (airline_id, source_id, destination_id) = route.natural_key();
            self.by_airline
                .entry(airline_id)
                .or_default()
                .insert((source_id, destination_id));
        }
    }

    fn parse_row(&mut self, fields: &[String]) -> std::result::Result<Route, RouteError> {
        // Field checks, strictly in column order
        if !self.airline_code_rule.is_match(&fields[0]) {
            return Err(RouteError::InvalidAirlineCode);
        }
        let airline_code = fields[0].clone();

        let airline_id = self.parse_id(&fields[1], RouteError::InvalidAirlineId)?;

        if !self.airport_code_rule.is_match(&fields[2]) {
            return Err(RouteError::InvalidSourceCode);
        }
        let source_code = fields[2].clone();

        let source_id = self.parse_id(&fields[3], RouteError::InvalidSourceId)?;

        if !self.airport_code_rule.is_match(&fields[4]) {
            return Err(RouteError::InvalidDestinationCode);
        }
        let destination_code = fields[4].clone();

        let destination_id = self.parse_id(&fields[5], RouteError::InvalidDestinationId)?;

        let codeshare = match fields[6].as_str() {
            "" => false,
            "Y" => true,
            _ => return Err(RouteError::InvalidCodeshare),
        };

        if !self.stops_rule.is_match(&fields[7]) {
            return Err(RouteError::InvalidStops);
        }
        let stops: u8 = fields[7].parse().map_err(|_| RouteError::Unknown)?;

        if !self.equipment_rule.is_match(&fields[8]) {
            return Err(RouteError::InvalidEquipment);
        }
        let equipment: Vec<String> = fields[8].split(' ').map(|s| s.to_string()).collect();

        // Natural-key check within this airline's bucket only
        let bucket = self.by_airline.entry(airline_id).or_default();
        if !bucket.insert((source_id, destination_id)) {
            return Err(RouteError::DuplicateRoute);
        }

        Ok(Route {
            airline_code,
            airline_id,
            source_code,
            source_id,
            destination_code,
            destination_id,
            codeshare,
            stops,
            equipment,
        })
    }
}
