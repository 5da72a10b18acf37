//! Airport row grammar
//!
//! Validates the 12-column airport row and tracks airport IDs for duplicate
//! detection. The ID check is a linear scan over every record already in the
//! working set, pre-existing and accepted-this-run alike.

use regex::Regex;

use super::compile_rule;
use super::engine::{RowError, RowGrammar};
use crate::Result;
use crate::app::models::{Airport, Dst};
use crate::constants::{AIRPORT_COLUMN_COUNT, NULL_SENTINEL, airport_errors, is_dst_char};

/// Airport validation failure kinds, discriminants are the report codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirportError {
    WrongFieldCount = 0,
    InvalidId = 1,
    DuplicateId = 2,
    InvalidName = 3,
    InvalidCity = 4,
    InvalidCountry = 5,
    InvalidIata = 6,
    InvalidIcao = 7,
    InvalidLatitude = 8,
    InvalidLongitude = 9,
    InvalidAltitude = 10,
    InvalidTimezone = 11,
    InvalidDst = 12,
    InvalidDatabaseTimezone = 13,
    Unknown = 14,
}

impl RowError for AirportError {
    fn code(self) -> usize {
        self as usize
    }

    fn message(self) -> &'static str {
        airport_errors::MESSAGES[self.code()]
    }
}

/// Grammar for airport rows
#[derive(Debug)]
pub struct AirportGrammar {
    name_rule: Regex,
    country_rule: Regex,
    iata_rule: Regex,
    icao_rule: Regex,
    digits_rule: Regex,
    tz_database_rule: Regex,

    /// IDs of every airport in the working set, scanned linearly
    known_ids: Vec<u32>,
}

impl AirportGrammar {
    /// Create a grammar with freshly compiled field rules
    pub fn new() -> Result<Self> {
        Ok(Self {
            name_rule: compile_rule(r"^[\p{L}0-9 .,'()/-]+$")?,
            country_rule: compile_rule(r"^[A-Za-z .'-]+$")?,
            iata_rule: compile_rule(r"^[A-Za-z0-9]{3}$")?,
            icao_rule: compile_rule(r"^[A-Za-z0-9]{4}$")?,
            digits_rule: compile_rule(r"^[0-9]+$")?,
            tz_database_rule: compile_rule(r"^[A-Za-z_/-]+$")?,
            known_ids: Vec::new(),
        })
    }

    /// Whether a code field carries the "no code assigned" convention
    fn is_absent_code(field: &str) -> bool {
        field.is_empty()
            || field.eq_ignore_ascii_case("null")
            || field.eq_ignore_ascii_case("unknown")
    }
}

impl RowGrammar for AirportGrammar {
    type Record = Airport;
    type Error = AirportError;

    fn column_count(&self) -> usize {
        AIRPORT_COLUMN_COUNT
    }

    fn messages(&self) -> &'static [&'static str] {
        airport_errors::MESSAGES
    }

    fn wrong_field_count(&self) -> AirportError {
        AirportError::WrongFieldCount
    }

    fn seed(&mut self, existing: &[Airport]) {
        self.known_ids.extend(existing.iter().map(|a| a.id));
    }

    fn parse_row(&mut self, fields: &[String]) -> std::result::Result<Airport, AirportError> {
        // Field checks, strictly in column order
        if !self.digits_rule.is_match(&fields[0]) {
            return Err(AirportError::InvalidId);
        }
        // Digits passed the rule but may still overflow the ID type
        let id: u32 = fields[0].parse().map_err(|_| AirportError::Unknown)?;

        if !self.name_rule.is_match(&fields[1]) {
            return Err(AirportError::InvalidName);
        }
        let name = fields[1].clone();

        if !self.name_rule.is_match(&fields[2]) {
            return Err(AirportError::InvalidCity);
        }
        let city = fields[2].clone();

        if !self.country_rule.is_match(&fields[3]) {
            return Err(AirportError::InvalidCountry);
        }
        let country = fields[3].clone();

        let iata = if Self::is_absent_code(&fields[4]) {
            None
        } else if self.iata_rule.is_match(&fields[4]) {
            Some(fields[4].clone())
        } else {
            return Err(AirportError::InvalidIata);
        };

        let icao = if Self::is_absent_code(&fields[5]) || fields[5] == NULL_SENTINEL {
            None
        } else if self.icao_rule.is_match(&fields[5]) {
            Some(fields[5].clone())
        } else {
            return Err(AirportError::InvalidIcao);
        };

        let latitude: f64 = fields[6].parse().map_err(|_| AirportError::InvalidLatitude)?;
        let longitude: f64 = fields[7]
            .parse()
            .map_err(|_| AirportError::InvalidLongitude)?;
        let altitude: i32 = fields[8].parse().map_err(|_| AirportError::InvalidAltitude)?;

        let timezone: f64 = fields[9].parse().map_err(|_| AirportError::InvalidTimezone)?;
        if !(-12.0..=14.0).contains(&timezone) {
            return Err(AirportError::InvalidTimezone);
        }

        let mut dst_chars = fields[10].chars();
        let dst = match (dst_chars.next(), dst_chars.next()) {
            (Some(c), None) if is_dst_char(c) => {
                Dst::try_from(c).map_err(|_| AirportError::Unknown)?
            }
            _ => return Err(AirportError::InvalidDst),
        };

        let tz_database = if fields[11] == NULL_SENTINEL {
            None
        } else if self.tz_database_rule.is_match(&fields[11]) {
            Some(fields[11].clone())
        } else {
            return Err(AirportError::InvalidDatabaseTimezone);
        };

        // Natural-key check against the whole working set
        if self.known_ids.contains(&id) {
            return Err(AirportError::DuplicateId);
        }
        self.known_ids.push(id);

        Ok(Airport {
            id,
            name,
            city,
            country,
            iata,
            icao,
            latitude,
            longitude,
            altitude,
            timezone,
            dst,
            tz_database,
        })
    }
}
