//! Flight Data Ingestor Library
//!
//! A Rust library for ingesting and validating airport, airline, and flight route
//! reference data supplied as line-oriented, comma-separated text.
//!
//! This library provides tools for:
//! - Validating every field of every record against entity-specific grammars
//! - Deduplicating records against previously-accepted and same-pass data
//! - Deciding file acceptance with an error-density policy (200-error hard cutoff)
//! - Rendering per-run error reports with stable codes and wording
//! - Forwarding validated record sets to a pluggable storage collaborator

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod ingest;
        pub mod loader;
    }
    pub mod adapters {
        pub mod storage;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Airline, Airport, EntityKind, RecordSet, Route};
pub use config::IngestionConfig;

/// Result type alias for the flight data ingestor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ingestion operations
///
/// Variants here cover the fatal error kinds: filesystem and filename failures
/// raised before an engine runs, and whole-run rejections raised by the
/// acceptance policy. Per-line validation failures are never surfaced this way;
/// they are accumulated in the run's error tally instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Filename carries an extension other than the supported one
    #[error("Unsupported file extension on '{name}': only .{expected} files can be uploaded")]
    UnsupportedExtension { name: String, expected: &'static str },

    /// Filename carries no extension at all
    #[error("File '{name}' has no extension")]
    MissingExtension { name: String },

    /// Filename already associated with accepted data, or reserved for internal use
    #[error("A file named '{name}' has already been uploaded")]
    DuplicateFileName { name: String },

    /// Entity kind string not one of airport/airline/route
    #[error("Unknown entity kind: {kind}")]
    UnknownEntityKind { kind: String },

    /// Whole-run rejection (hard reject, all lines invalid, or single invalid entry)
    #[error("{message}")]
    FileRejected { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an unsupported extension error
    pub fn unsupported_extension(name: impl Into<String>) -> Self {
        Self::UnsupportedExtension {
            name: name.into(),
            expected: constants::SUPPORTED_EXTENSION,
        }
    }

    /// Create a missing extension error
    pub fn missing_extension(name: impl Into<String>) -> Self {
        Self::MissingExtension { name: name.into() }
    }

    /// Create a duplicate filename error
    pub fn duplicate_file_name(name: impl Into<String>) -> Self {
        Self::DuplicateFileName { name: name.into() }
    }

    /// Create an unknown entity kind error
    pub fn unknown_entity_kind(kind: impl Into<String>) -> Self {
        Self::UnknownEntityKind { kind: kind.into() }
    }

    /// Create a whole-run rejection error
    pub fn file_rejected(message: impl Into<String>) -> Self {
        Self::FileRejected {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
