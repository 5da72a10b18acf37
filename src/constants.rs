//! Application constants for the flight data ingestor
//!
//! This module contains the fixed values of the ingestion pipeline: column
//! counts, the hard-rejection threshold, filename policy, field alphabets,
//! and the per-entity error message tables.

// =============================================================================
// File and Filename Policy
// =============================================================================

/// The single supported upload extension
pub const SUPPORTED_EXTENSION: &str = "csv";

/// Internal filename used for single-line airport entries when no file is open
pub const RESERVED_AIRPORT_FILENAME: &str = "single_entry_airports.csv";

/// Internal filename used for single-line airline entries when no file is open
pub const RESERVED_AIRLINE_FILENAME: &str = "single_entry_airlines.csv";

/// Internal filename used for single-line route entries when no file is open
pub const RESERVED_ROUTE_FILENAME: &str = "single_entry_routes.csv";

/// All reserved internal filenames, never acceptable as user uploads
pub const RESERVED_FILENAMES: &[&str] = &[
    RESERVED_AIRPORT_FILENAME,
    RESERVED_AIRLINE_FILENAME,
    RESERVED_ROUTE_FILENAME,
];

// =============================================================================
// Acceptance Policy
// =============================================================================

/// Error count beyond which a run is abandoned mid-file
pub const DEFAULT_ERROR_THRESHOLD: usize = 200;

/// Fatal message for a multi-line file in which no line validated
pub const ALL_INVALID_MESSAGE: &str = "File rejected: all lines contain errors";

/// Fatal message for a single-line entry that did not validate
pub const SINGLE_ENTRY_MESSAGE: &str = "Entry contains errors and was not uploaded";

// =============================================================================
// Row Shapes
// =============================================================================

/// Expected column count for an airport row
/// (id, name, city, country, IATA, ICAO, lat, lon, alt, timezone, DST, db timezone)
pub const AIRPORT_COLUMN_COUNT: usize = 12;

/// Expected column count for an airline row
/// (id, name, alias, IATA, ICAO, callsign, country, active)
pub const AIRLINE_COLUMN_COUNT: usize = 8;

/// Expected column count for a route row
/// (airline code, airline id, src code, src id, dst code, dst id, codeshare, stops, equipment)
pub const ROUTE_COLUMN_COUNT: usize = 9;

// =============================================================================
// Field Alphabets and Sentinels
// =============================================================================

/// Valid daylight-savings group characters
pub const DST_ALPHABET: &[char] = &['E', 'A', 'S', 'O', 'Z', 'N', 'U'];

/// Null sentinel used throughout OpenFlights-style data
pub const NULL_SENTINEL: &str = "\\N";

/// Maximum digits in a route airline/airport ID field
pub const ROUTE_ID_MAX_DIGITS: usize = 5;

// =============================================================================
// Error Message Tables
// =============================================================================

/// Airport error messages, indexed by error code
pub mod airport_errors {
    pub const MESSAGES: &[&str] = &[
        "Wrong number of parameters",
        "Invalid airport ID",
        "Duplicate airport ID",
        "Invalid airport name",
        "Invalid airport city",
        "Invalid airport country",
        "Invalid IATA code",
        "Invalid ICAO code",
        "Invalid latitude",
        "Invalid longitude",
        "Invalid altitude",
        "Invalid timezone",
        "Invalid daylight savings time",
        "Invalid database timezone",
        "Unknown error",
    ];
}

/// Airline error messages, indexed by error code
pub mod airline_errors {
    pub const MESSAGES: &[&str] = &[
        "Wrong number of parameters",
        "Invalid airline ID",
        "Duplicate airline ID",
        "Invalid airline name",
        "Invalid airline alias",
        "Invalid IATA code",
        "Invalid ICAO code",
        "Invalid callsign",
        "Invalid country",
        "Invalid active status",
        "Airline ID exists with different data",
        "Unknown error",
    ];
}

/// Route error messages, indexed by error code
pub mod route_errors {
    pub const MESSAGES: &[&str] = &[
        "Wrong number of parameters",
        "Invalid airline code",
        "Invalid airline ID",
        "Invalid source airport code",
        "Invalid source airport ID",
        "Invalid destination airport code",
        "Invalid destination airport ID",
        "Invalid codeshare",
        "Invalid number of stops",
        "Invalid equipment",
        "Duplicate route",
        "Unknown error",
    ];
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a filename is one of the reserved internal names
pub fn is_reserved_filename(name: &str) -> bool {
    RESERVED_FILENAMES.contains(&name)
}

/// Check whether a character is a valid daylight-savings group
pub fn is_dst_char(c: char) -> bool {
    DST_ALPHABET.contains(&c)
}
