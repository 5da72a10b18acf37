//! Loader orchestration
//!
//! The loader is the only component with I/O and filename concerns. It checks
//! the extension and filename policy, reads the file into lines, selects and
//! seeds the right ingestion engine, converts fatal outcomes into errors, and
//! forwards accepted record sets to the storage collaborator.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::app::adapters::storage::Storage;
use crate::app::models::{Airline, Airport, EntityKind, RecordSet, Route};
use crate::app::services::ingest::{
    AirlineGrammar, AirportGrammar, IngestOutcome, IngestionEngine, RouteGrammar,
};
use crate::config::IngestionConfig;
use crate::constants::is_reserved_filename;
use crate::{Error, Result};

/// Result of one engine run, before storage forwarding
#[derive(Debug, Clone)]
pub struct EngineRun {
    /// The full working set produced by the run
    pub records: RecordSet,
    /// Number of lines newly accepted
    pub accepted: usize,
    /// Acceptance decision
    pub outcome: IngestOutcome,
    /// Human-readable report
    pub report: String,
}

/// Orchestrates file ingestion for all three entity kinds
///
/// Holds the storage sink, working copies of accepted records per kind (the
/// seed for append-mode single-line entries), the per-kind current filename,
/// and the set of filenames already associated with accepted data.
#[derive(Debug)]
pub struct Loader<S: Storage> {
    storage: S,
    config: IngestionConfig,

    airports: Vec<Airport>,
    airlines: Vec<Airline>,
    routes: Vec<Route>,

    current_airport_file: Option<String>,
    current_airline_file: Option<String>,
    current_route_file: Option<String>,

    accepted_filenames: HashSet<String>,

    /// Kind and outcome of the most recent engine run
    last_run: Option<(EntityKind, IngestOutcome)>,
}

impl<S: Storage> Loader<S> {
    /// Create a loader over a storage sink
    pub fn new(storage: S, config: IngestionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            storage,
            config,
            airports: Vec::new(),
            airlines: Vec::new(),
            routes: Vec::new(),
            current_airport_file: None,
            current_airline_file: None,
            current_route_file: None,
            accepted_filenames: HashSet::new(),
            last_run: None,
        })
    }

    /// Check that a filename carries the single supported extension
    pub fn check_file_type(&self, name: &str) -> Result<()> {
        match name.rsplit_once('.') {
            None => Err(Error::missing_extension(name)),
            Some((_, ext)) if ext.eq_ignore_ascii_case(&self.config.supported_extension) => Ok(()),
            Some(_) => Err(Error::unsupported_extension(name)),
        }
    }

    /// Check that a filename is not already taken and not reserved
    pub fn check_duplicate_filename(&self, name: &str) -> Result<()> {
        if is_reserved_filename(name) || self.accepted_filenames.contains(name) {
            return Err(Error::duplicate_file_name(name));
        }
        Ok(())
    }

    /// Read a file into its ordered sequence of raw lines
    pub fn open_file(path: &Path) -> Result<Vec<String>> {
        if !path.is_file() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

        Ok(content.lines().map(|l| l.to_string()).collect())
    }

    /// Select, seed, and run the engine for a kind string
    ///
    /// Fatal outcomes (hard rejection, all lines invalid, single invalid
    /// entry) surface as [`Error::FileRejected`]; the caller never observes a
    /// partial working set from them.
    pub fn ingest_lines(&self, kind: &str, lines: &[String], append: bool) -> Result<EngineRun> {
        let kind: EntityKind = kind.parse()?;
        self.run_engine(kind, lines, append)
    }

    /// Load a file: policy checks, read, validate, forward to storage
    ///
    /// Returns the human-readable report of the run.
    pub fn load_file(&mut self, path: &Path, kind: &str) -> Result<String> {
        let filename = file_name_of(path)?;
        info!("Loading {} data from '{}'", kind, filename);

        self.check_file_type(&filename)?;
        self.check_duplicate_filename(&filename)?;
        let lines = Self::open_file(path)?;

        let entity_kind: EntityKind = kind.parse()?;
        let run = self.run_engine(entity_kind, &lines, false)?;

        self.install(entity_kind, &run.records, &filename);
        self.storage.set_data(run.records, entity_kind, &filename);
        self.last_run = Some((entity_kind, run.outcome));

        info!("Accepted {} {} lines from '{}'", run.accepted, kind, filename);
        Ok(run.report)
    }

    /// Validate a file exactly like [`Loader::load_file`] without forwarding
    /// anything to storage or touching loader state (dry run)
    pub fn check_file(&self, path: &Path, kind: &str) -> Result<String> {
        let filename = file_name_of(path)?;
        debug!("Checking {} data in '{}'", kind, filename);

        self.check_file_type(&filename)?;
        self.check_duplicate_filename(&filename)?;
        let lines = Self::open_file(path)?;

        let entity_kind: EntityKind = kind.parse()?;
        let run = self.run_engine(entity_kind, &lines, false)?;
        Ok(run.report)
    }

    /// Validate a single raw line in append mode against the currently open
    /// file of that kind, falling back to the kind's reserved filename
    pub fn load_line(&mut self, entry: &str, kind: &str) -> Result<String> {
        let entity_kind: EntityKind = kind.parse()?;
        let lines = vec![entry.to_string()];

        let run = self.run_engine(entity_kind, &lines, true)?;

        let filename = self
            .current_file(entity_kind)
            .unwrap_or_else(|| entity_kind.reserved_filename().to_string());

        self.install(entity_kind, &run.records, &filename);
        self.storage.set_data(run.records, entity_kind, &filename);
        self.last_run = Some((entity_kind, run.outcome));

        info!("Accepted single {} entry into '{}'", kind, filename);
        Ok(run.report)
    }

    /// The filename currently associated with a kind, if any
    pub fn current_file(&self, kind: EntityKind) -> Option<String> {
        match kind {
            EntityKind::Airport => self.current_airport_file.clone(),
            EntityKind::Airline => self.current_airline_file.clone(),
            EntityKind::Route => self.current_route_file.clone(),
        }
    }

    /// Kind and outcome of the most recent engine run
    pub fn last_run(&self) -> Option<(EntityKind, IngestOutcome)> {
        self.last_run
    }

    /// Consume the loader, returning its storage sink
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Borrow the storage sink
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn run_engine(&self, kind: EntityKind, lines: &[String], append: bool) -> Result<EngineRun> {
        let run = match kind {
            EntityKind::Airport => {
                let mut engine =
                    IngestionEngine::new(AirportGrammar::new()?, &self.config);
                if append {
                    engine = engine.with_existing(self.airports.clone());
                }
                let result = engine.run(lines);
                EngineRun {
                    records: RecordSet::Airports(result.records),
                    accepted: result.accepted,
                    outcome: result.outcome,
                    report: result.report,
                }
            }
            EntityKind::Airline => {
                let mut engine =
                    IngestionEngine::new(AirlineGrammar::new()?, &self.config);
                if append {
                    engine = engine.with_existing(self.airlines.clone());
                }
                let result = engine.run(lines);
                EngineRun {
                    records: RecordSet::Airlines(result.records),
                    accepted: result.accepted,
                    outcome: result.outcome,
                    report: result.report,
                }
            }
            EntityKind::Route => {
                let mut engine = IngestionEngine::new(RouteGrammar::new()?, &self.config);
                if append {
                    engine = engine.with_existing(self.routes.clone());
                }
                let result = engine.run(lines);
                EngineRun {
                    records: RecordSet::Routes(result.records),
                    accepted: result.accepted,
                    outcome: result.outcome,
                    report: result.report,
                }
            }
        };

        if run.outcome.is_fatal() {
            return Err(Error::file_rejected(run.report));
        }
        Ok(run)
    }

    /// Adopt a successful run's working set as the kind's current data
    fn install(&mut self, kind: EntityKind, records: &RecordSet, filename: &str) {
        match (kind, records) {
            (EntityKind::Airport, RecordSet::Airports(airports)) => {
                self.airports = airports.clone();
                self.current_airport_file = Some(filename.to_string());
            }
            (EntityKind::Airline, RecordSet::Airlines(airlines)) => {
                self.airlines = airlines.clone();
                self.current_airline_file = Some(filename.to_string());
            }
            (EntityKind::Route, RecordSet::Routes(routes)) => {
                self.routes = routes.clone();
                self.current_route_file = Some(filename.to_string());
            }
            _ => {}
        }

        if !is_reserved_filename(filename) {
            self.accepted_filenames.insert(filename.to_string());
        }
    }
}

fn file_name_of(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .ok_or_else(|| Error::file_not_found(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::adapters::storage::InMemoryStorage;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const GOROKA: &str = "1,\"Goroka\",\"Goroka\",\"Papua New Guinea\",\"GKA\",\"AYGA\",-6.081689,145.391881,5282,10,\"U\",\"Pacific/Port_Moresby\"";
    const AER_KZN: &str = "2B,410,AER,2965,KZN,2990,,0,CR2";

    fn loader() -> Loader<InMemoryStorage> {
        Loader::new(InMemoryStorage::new(), IngestionConfig::default()).unwrap()
    }

    fn temp_csv(name_hint: &str, lines: &[&str]) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix(name_hint)
            .suffix(".csv")
            .tempfile()
            .unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_check_file_type() {
        let loader = loader();
        assert!(loader.check_file_type("airports.csv").is_ok());
        assert!(loader.check_file_type("AIRPORTS.CSV").is_ok());

        match loader.check_file_type("airports.txt").unwrap_err() {
            Error::UnsupportedExtension { name, .. } => assert_eq!(name, "airports.txt"),
            other => panic!("Expected UnsupportedExtension, got {:?}", other),
        }

        match loader.check_file_type("airports").unwrap_err() {
            Error::MissingExtension { name } => assert_eq!(name, "airports"),
            other => panic!("Expected MissingExtension, got {:?}", other),
        }
    }

    #[test]
    fn test_reserved_filenames_rejected() {
        let loader = loader();
        for name in [
            "single_entry_airports.csv",
            "single_entry_airlines.csv",
            "single_entry_routes.csv",
        ] {
            assert!(matches!(
                loader.check_duplicate_filename(name),
                Err(Error::DuplicateFileName { .. })
            ));
        }
        assert!(loader.check_duplicate_filename("airports.csv").is_ok());
    }

    #[test]
    fn test_open_file_missing() {
        let result = Loader::<InMemoryStorage>::open_file(Path::new("/no/such/file.csv"));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_load_file_forwards_to_storage() {
        let mut loader = loader();
        let file = temp_csv("airports", &[GOROKA]);
        let filename = file_name_of(file.path()).unwrap();

        let report = loader.load_file(file.path(), "airport").unwrap();
        assert_eq!(report, "1 lines accepted with no errors");

        let stored = loader
            .storage()
            .get(EntityKind::Airport, &filename)
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(
            loader.last_run(),
            Some((EntityKind::Airport, IngestOutcome::Accepted))
        );
        assert_eq!(loader.current_file(EntityKind::Airport), Some(filename));
    }

    #[test]
    fn test_load_file_twice_same_name_rejected() {
        let mut loader = loader();
        let file = temp_csv("routes", &[AER_KZN]);

        loader.load_file(file.path(), "route").unwrap();
        let result = loader.load_file(file.path(), "route");

        assert!(matches!(result, Err(Error::DuplicateFileName { .. })));
    }

    #[test]
    fn test_unknown_entity_kind() {
        let mut loader = loader();
        let file = temp_csv("data", &[GOROKA]);

        let result = loader.load_file(file.path(), "ferry");
        assert!(matches!(result, Err(Error::UnknownEntityKind { .. })));
    }

    #[test]
    fn test_check_file_is_a_dry_run() {
        let mut loader = loader();
        let file = temp_csv("airlines", &["3320,Lufthansa,\\N,LH,DLH,LUFTHANSA,Germany,Y"]);

        let report = loader.check_file(file.path(), "airline").unwrap();
        assert_eq!(report, "1 lines accepted with no errors");
        assert_eq!(loader.storage().table_count(), 0);
        assert!(loader.last_run().is_none());

        // The same name is still loadable afterwards
        assert!(loader.load_file(file.path(), "airline").is_ok());
    }

    #[test]
    fn test_invalid_single_entry_surfaces_fatal_error() {
        let mut loader = loader();

        let result = loader.load_line("not a route", "route");
        match result.unwrap_err() {
            Error::FileRejected { message } => {
                assert!(message.starts_with("Entry contains errors and was not uploaded"));
            }
            other => panic!("Expected FileRejected, got {:?}", other),
        }
        assert_eq!(loader.storage().table_count(), 0);
    }

    #[test]
    fn test_load_line_uses_reserved_filename_when_no_file_open() {
        let mut loader = loader();

        loader.load_line(AER_KZN, "route").unwrap();

        let stored = loader
            .storage()
            .get(EntityKind::Route, "single_entry_routes.csv")
            .unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn test_load_line_appends_to_current_file() {
        let mut loader = loader();
        let file = temp_csv("routes", &[AER_KZN]);
        let filename = file_name_of(file.path()).unwrap();

        loader.load_file(file.path(), "route").unwrap();
        loader
            .load_line("BA,1355,SIN,3316,LHR,507,,0,744", "route")
            .unwrap();

        let stored = loader.storage().get(EntityKind::Route, &filename).unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn test_load_line_duplicate_against_loaded_file() {
        let mut loader = loader();
        let file = temp_csv("routes", &[AER_KZN]);

        loader.load_file(file.path(), "route").unwrap();
        let result = loader.load_line(AER_KZN, "route");

        match result.unwrap_err() {
            Error::FileRejected { message } => {
                assert!(message.contains("Error [10] Duplicate route: 1 occurrences"));
            }
            other => panic!("Expected FileRejected, got {:?}", other),
        }
        // The working copy is unchanged by the failed entry
        assert_eq!(loader.storage().record_count(EntityKind::Route), 1);
    }

    #[test]
    fn test_hard_rejected_file_reaches_neither_storage_nor_state() {
        let mut loader = Loader::new(
            InMemoryStorage::new(),
            IngestionConfig {
                error_threshold: 2,
                ..Default::default()
            },
        )
        .unwrap();

        let file = temp_csv("bad", &["x", "x", "x", GOROKA]);
        let result = loader.load_file(file.path(), "airport");

        match result.unwrap_err() {
            Error::FileRejected { message } => {
                assert_eq!(message, "File rejected: more than 2 lines contain errors");
            }
            other => panic!("Expected FileRejected, got {:?}", other),
        }
        assert_eq!(loader.storage().table_count(), 0);
        assert_eq!(loader.current_file(EntityKind::Airport), None);
    }

    #[test]
    fn test_ingest_lines_is_independently_callable() {
        let loader = loader();
        let lines = vec![AER_KZN.to_string()];

        let run = loader.ingest_lines("route", &lines, false).unwrap();
        assert_eq!(run.accepted, 1);
        assert_eq!(run.records.kind(), EntityKind::Route);
    }
}
