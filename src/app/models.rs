//! Data models for flight reference data
//!
//! This module contains the validated record types produced by the ingestion
//! engines, the entity-kind discriminator used for routing, and the natural
//! keys that drive duplicate detection.

use crate::constants::{self, is_dst_char};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Airport
// =============================================================================

/// A validated airport record
///
/// Fields mirror the 12-column OpenFlights-style airport row. Optional codes
/// hold `None` where the input carried an empty or null sentinel value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Unique airport identifier - the natural key for airport deduplication
    pub id: u32,

    /// Airport name (e.g., "Goroka")
    pub name: String,

    /// City served by the airport
    pub city: String,

    /// Country the airport is located in
    pub country: String,

    /// Three-letter IATA code, if assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iata: Option<String>,

    /// Four-letter ICAO code, if assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icao: Option<String>,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Elevation above sea level in feet
    pub altitude: i32,

    /// UTC offset in hours, within [-12, 14]
    pub timezone: f64,

    /// Daylight-savings group
    pub dst: Dst,

    /// Olson database timezone name, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tz_database: Option<String>,
}

impl Airport {
    /// The field that must be unique among accepted airports
    pub fn natural_key(&self) -> u32 {
        self.id
    }
}

// =============================================================================
// Airline
// =============================================================================

/// A validated airline record
///
/// Fields mirror the 8-column airline row. The `\N`, "N/A", and empty
/// sentinels of the wire format normalize to `None` at parse time, so two
/// rows spelling "no value" differently compare equal here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    /// Unique airline identifier - the natural key for airline deduplication
    pub id: u32,

    /// Airline name
    pub name: String,

    /// Alternate name, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Two-character IATA designator, if assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iata: Option<String>,

    /// Three-character ICAO designator, if assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icao: Option<String>,

    /// Radio callsign, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsign: Option<String>,

    /// Country of registration, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Whether the airline is operationally active ("Y" in the input)
    pub active: bool,
}

impl Airline {
    /// The field that must be unique among accepted airlines
    pub fn natural_key(&self) -> u32 {
        self.id
    }
}

// =============================================================================
// Route
// =============================================================================

/// A validated flight route record
///
/// Fields mirror the 9-column route row. Null-sentinel airline and airport
/// IDs are normalized to 0 before validation, matching the wire format's
/// convention for unidentified carriers and airports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Two- or three-character airline designator
    pub airline_code: String,

    /// Numeric airline identifier (0 when unknown)
    pub airline_id: u32,

    /// Source airport code (IATA or ICAO)
    pub source_code: String,

    /// Numeric source airport identifier (0 when unknown)
    pub source_id: u32,

    /// Destination airport code (IATA or ICAO)
    pub destination_code: String,

    /// Numeric destination airport identifier (0 when unknown)
    pub destination_id: u32,

    /// Whether the flight is operated by another carrier
    pub codeshare: bool,

    /// Number of intermediate stops
    pub stops: u8,

    /// Aircraft types flown on this route, three characters each
    pub equipment: Vec<String>,
}

impl Route {
    /// The field combination that must be unique among accepted routes
    pub fn natural_key(&self) -> (u32, u32, u32) {
        (self.airline_id, self.source_id, self.destination_id)
    }
}

// =============================================================================
// Daylight-Savings Group
// =============================================================================

/// Daylight-savings observance group for an airport
///
/// One character per group in the input data, drawn from the fixed alphabet
/// E, A, S, O, Z, N, U.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dst {
    /// European rules
    Europe,
    /// US/Canada rules
    UsCanada,
    /// South America rules
    SouthAmerica,
    /// Australia rules
    Australia,
    /// New Zealand rules
    NewZealand,
    /// No daylight savings observed
    None,
    /// Observance unknown
    Unknown,
}

impl Dst {
    /// Get the single-character wire representation of this group
    pub fn as_char(self) -> char {
        match self {
            Dst::Europe => 'E',
            Dst::UsCanada => 'A',
            Dst::SouthAmerica => 'S',
            Dst::Australia => 'O',
            Dst::NewZealand => 'Z',
            Dst::None => 'N',
            Dst::Unknown => 'U',
        }
    }
}

impl TryFrom<char> for Dst {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'E' => Ok(Dst::Europe),
            'A' => Ok(Dst::UsCanada),
            'S' => Ok(Dst::SouthAmerica),
            'O' => Ok(Dst::Australia),
            'Z' => Ok(Dst::NewZealand),
            'N' => Ok(Dst::None),
            'U' => Ok(Dst::Unknown),
            _ => Err(Error::configuration(format!(
                "Invalid daylight savings group '{}': must be one of E, A, S, O, Z, N, U",
                c
            ))),
        }
    }
}

impl FromStr for Dst {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_dst_char(c) => Dst::try_from(c),
            _ => Err(Error::configuration(format!(
                "Invalid daylight savings group '{}': must be a single character of E, A, S, O, Z, N, U",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Dst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// =============================================================================
// Entity Kind
// =============================================================================

/// Discriminator for the three record kinds the pipeline ingests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Airport,
    Airline,
    Route,
}

impl EntityKind {
    /// Expected column count for one row of this kind
    pub fn arity(self) -> usize {
        match self {
            EntityKind::Airport => constants::AIRPORT_COLUMN_COUNT,
            EntityKind::Airline => constants::AIRLINE_COLUMN_COUNT,
            EntityKind::Route => constants::ROUTE_COLUMN_COUNT,
        }
    }

    /// Internal filename used for single-line entries of this kind
    pub fn reserved_filename(self) -> &'static str {
        match self {
            EntityKind::Airport => constants::RESERVED_AIRPORT_FILENAME,
            EntityKind::Airline => constants::RESERVED_AIRLINE_FILENAME,
            EntityKind::Route => constants::RESERVED_ROUTE_FILENAME,
        }
    }

    /// All entity kinds
    pub fn all() -> [EntityKind; 3] {
        [EntityKind::Airport, EntityKind::Airline, EntityKind::Route]
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "airport" | "airports" => Ok(EntityKind::Airport),
            "airline" | "airlines" => Ok(EntityKind::Airline),
            "route" | "routes" => Ok(EntityKind::Route),
            other => Err(Error::unknown_entity_kind(other)),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Airport => "airport",
            EntityKind::Airline => "airline",
            EntityKind::Route => "route",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Record Set
// =============================================================================

/// An owned, homogeneous collection of validated records
///
/// Produced by one ingestion run and moved, never shared, from the engine to
/// the loader and on to the storage collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordSet {
    Airports(Vec<Airport>),
    Airlines(Vec<Airline>),
    Routes(Vec<Route>),
}

impl RecordSet {
    /// The entity kind of the contained records
    pub fn kind(&self) -> EntityKind {
        match self {
            RecordSet::Airports(_) => EntityKind::Airport,
            RecordSet::Airlines(_) => EntityKind::Airline,
            RecordSet::Routes(_) => EntityKind::Route,
        }
    }

    /// Number of records in the set
    pub fn len(&self) -> usize {
        match self {
            RecordSet::Airports(v) => v.len(),
            RecordSet::Airlines(v) => v.len(),
            RecordSet::Routes(v) => v.len(),
        }
    }

    /// Whether the set holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
