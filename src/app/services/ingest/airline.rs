//! Airline row grammar
//!
//! Validates the 8-column airline row and tracks airline IDs in a map keyed
//! by the numeric ID. An occupied slot distinguishes a field-for-field
//! identical resubmission (duplicate, silently dropped) from a conflicting
//! record under the same ID.

use regex::Regex;
use std::collections::HashMap;

use super::compile_rule;
use super::engine::{RowError, RowGrammar};
use crate::Result;
use crate::app::models::Airline;
use crate::constants::{AIRLINE_COLUMN_COUNT, NULL_SENTINEL, airline_errors};

/// Airline validation failure kinds, discriminants are the report codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirlineError {
    WrongFieldCount = 0,
    InvalidId = 1,
    DuplicateId = 2,
    InvalidName = 3,
    InvalidAlias = 4,
    InvalidIata = 5,
    InvalidIcao = 6,
    InvalidCallsign = 7,
    InvalidCountry = 8,
    InvalidActive = 9,
    IdConflict = 10,
    Unknown = 11,
}

impl RowError for AirlineError {
    fn code(self) -> usize {
        self as usize
    }

    fn message(self) -> &'static str {
        airline_errors::MESSAGES[self.code()]
    }
}

/// Grammar for airline rows
#[derive(Debug)]
pub struct AirlineGrammar {
    digits_rule: Regex,
    name_rule: Regex,
    alias_rule: Regex,
    iata_rule: Regex,
    icao_rule: Regex,
    callsign_rule: Regex,
    country_rule: Regex,

    /// Working-set airlines keyed by their natural key
    by_id: HashMap<u32, Airline>,
}

impl AirlineGrammar {
    /// Create a grammar with freshly compiled field rules
    pub fn new() -> Result<Self> {
        Ok(Self {
            digits_rule: compile_rule(r"^[0-9]+$")?,
            name_rule: compile_rule(r"^[\p{L}0-9 .-]+$")?,
            alias_rule: compile_rule(r"^[\w ]+$")?,
            iata_rule: compile_rule(r"^[A-Za-z0-9-]{2}$")?,
            icao_rule: compile_rule(r"^[A-Za-z0-9]{3}$")?,
            callsign_rule: compile_rule(r"^[\p{L} -]+$")?,
            country_rule: compile_rule(r"^[\p{L} ]+$")?,
            by_id: HashMap::new(),
        })
    }
}

impl RowGrammar for AirlineGrammar {
    type Record = Airline;
    type Error = AirlineError;

    fn column_count(&self) -> usize {
        AIRLINE_COLUMN_COUNT
    }

    fn messages(&self) -> &'static [&'static str] {
        airline_errors::MESSAGES
    }

    fn wrong_field_count(&self) -> AirlineError {
        AirlineError::WrongFieldCount
    }

    fn seed(&mut self, existing: &[Airline]) {
        for airline in existing {
            self.by_id.insert(airline.id, airline.clone());
        }
    }

    fn parse_row(&mut self, fields: &[String]) -> std::result::Result<Airline, AirlineError> {
        // Field checks, strictly in column order
        if !self.digits_rule.is_match(&fields[0]) {
            return Err(AirlineError::InvalidId);
        }
        // Digits passed the rule but may still overflow the ID type
        let id: u32 = fields[0].parse().map_err(|_| AirlineError::Unknown)?;
        if id == 0 {
            return Err(AirlineError::InvalidId);
        }

        if !self.name_rule.is_match(&fields[1]) {
            return Err(AirlineError::InvalidName);
        }
        let name = fields[1].clone();

        let alias = if fields[2].is_empty() || fields[2] == NULL_SENTINEL {
            None
        } else if self.alias_rule.is_match(&fields[2]) {
            Some(fields[2].clone())
        } else {
            return Err(AirlineError::InvalidAlias);
        };

        let iata = if fields[3].is_empty() {
            None
        } else if self.iata_rule.is_match(&fields[3]) {
            Some(fields[3].clone())
        } else {
            return Err(AirlineError::InvalidIata);
        };

        let icao = if fields[4].is_empty() || fields[4] == NULL_SENTINEL || fields[4] == "N/A" {
            None
        } else if self.icao_rule.is_match(&fields[4]) {
            Some(fields[4].clone())
        } else {
            return Err(AirlineError::InvalidIcao);
        };

        let callsign = if fields[5].is_empty() {
            None
        } else if self.callsign_rule.is_match(&fields[5]) {
            Some(fields[5].clone())
        } else {
            return Err(AirlineError::InvalidCallsign);
        };

        let country = if fields[6].is_empty() || fields[6] == NULL_SENTINEL {
            None
        } else if self.country_rule.is_match(&fields[6]) {
            Some(fields[6].clone())
        } else {
            return Err(AirlineError::InvalidCountry);
        };

        let active = match fields[7].as_str() {
            "Y" => true,
            "N" => false,
            _ => return Err(AirlineError::InvalidActive),
        };

        let airline = Airline {
            id,
            name,
            alias,
            iata,
            icao,
            callsign,
            country,
            active,
        };

        // Natural-key check: an occupied slot is either an identical
        // resubmission or a conflicting record
        match self.by_id.get(&id) {
            Some(existing) if *existing == airline => Err(AirlineError::DuplicateId),
            Some(_) => Err(AirlineError::IdConflict),
            None => {
                self.by_id.insert(id, airline.clone());
                Ok(airline)
            }
        }
    }
}
