//! Generic ingestion engine and acceptance policy
//!
//! The engine owns the per-line loop shared by all three entity kinds: split
//! the raw line, check the row shape, delegate field validation and duplicate
//! detection to the entity grammar, and account every failure in the run's
//! error tally. It also applies the file-level acceptance policy, including
//! the mid-run hard-rejection cutoff.

use tracing::{debug, info};

use super::line::split_fields;
use super::tally::ErrorTally;
use crate::config::IngestionConfig;
use crate::constants::{ALL_INVALID_MESSAGE, SINGLE_ENTRY_MESSAGE};

/// A validation error produced by one entity grammar
///
/// Implementors are closed enums whose discriminants are the stable report
/// codes; code 0 is always the row-shape failure.
pub trait RowError: Copy + std::fmt::Debug {
    /// The report code of this error
    fn code(self) -> usize;

    /// The report wording of this error
    fn message(self) -> &'static str;
}

/// Per-entity row grammar: field rules plus duplicate-key tracking
///
/// A grammar is stateful within one run: every accepted row updates its
/// duplicate index, so later rows of the same run are checked against
/// earlier ones. Seeding installs pre-existing records for append mode.
pub trait RowGrammar {
    /// The validated record this grammar produces
    type Record: Clone + std::fmt::Debug;

    /// The error taxonomy of this grammar
    type Error: RowError;

    /// Expected number of columns in one row
    fn column_count(&self) -> usize;

    /// Message table for report rendering, in code order
    fn messages(&self) -> &'static [&'static str];

    /// The error registered when a row has the wrong column count
    fn wrong_field_count(&self) -> Self::Error;

    /// Index the natural keys of pre-existing records for append mode
    fn seed(&mut self, existing: &[Self::Record]);

    /// Validate one row's fields in order, stopping at the first failure,
    /// then check its natural key against the keys seen so far. On success
    /// the key is recorded and the built record returned.
    fn parse_row(&mut self, fields: &[String]) -> Result<Self::Record, Self::Error>;
}

/// Outcome of one ingestion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Every line, or at least one line, validated; the working set is kept
    Accepted,
    /// The single submitted line did not validate
    SingleEntryRejected,
    /// A multi-line (or empty) input produced no valid line
    AllLinesRejected,
    /// The error threshold was crossed mid-run; partial results discarded
    HardRejected,
}

impl IngestOutcome {
    /// Whether this outcome aborts the operation instead of returning records
    pub fn is_fatal(self) -> bool {
        !matches!(self, IngestOutcome::Accepted)
    }
}

/// Result of one ingestion run
///
/// On [`IngestOutcome::Accepted`] the records hold the full working set:
/// pre-existing records passed in for append mode followed by the lines
/// accepted this run. On every fatal outcome the records are empty.
#[derive(Debug, Clone)]
pub struct IngestResult<R> {
    /// The working set produced by the run
    pub records: Vec<R>,

    /// Number of lines newly accepted this run
    pub accepted: usize,

    /// Error accounting for the run (empty after a hard rejection)
    pub tally: ErrorTally,

    /// Acceptance decision
    pub outcome: IngestOutcome,

    /// Human-readable report
    pub report: String,
}

/// Ingestion engine for one entity kind
///
/// Consumes a sequence of raw lines in a strict sequential pass; later lines'
/// duplicate checks depend on earlier lines' accepted records, so per-line
/// ordering is a correctness requirement.
#[derive(Debug)]
pub struct IngestionEngine<G: RowGrammar> {
    grammar: G,
    existing: Vec<G::Record>,
    error_threshold: usize,
}

impl<G: RowGrammar> IngestionEngine<G> {
    /// Create an engine over an empty working set
    pub fn new(grammar: G, config: &IngestionConfig) -> Self {
        Self {
            grammar,
            existing: Vec::new(),
            error_threshold: config.error_threshold,
        }
    }

    /// Seed the engine with previously-accepted records (append mode)
    pub fn with_existing(mut self, existing: Vec<G::Record>) -> Self {
        self.grammar.seed(&existing);
        self.existing = existing;
        self
    }

    /// Run the engine over the input lines, consuming it
    pub fn run(mut self, lines: &[String]) -> IngestResult<G::Record> {
        let mut accepted: Vec<G::Record> = Vec::new();
        let mut tally = ErrorTally::new(self.grammar.messages());

        for (index, raw) in lines.iter().enumerate() {
            let fields = split_fields(raw);

            if fields.len() != self.grammar.column_count() {
                let error = self.grammar.wrong_field_count();
                debug!(
                    "Line {}: expected {} fields, found {}",
                    index + 1,
                    self.grammar.column_count(),
                    fields.len()
                );
                tally.register(error.code());
            } else {
                match self.grammar.parse_row(&fields) {
                    Ok(record) => accepted.push(record),
                    Err(error) => {
                        debug!("Line {}: {}", index + 1, error.message());
                        tally.register(error.code());
                    }
                }
            }

            // Mid-run cutoff: abandon the file, discarding partial results
            if tally.total() > self.error_threshold {
                info!(
                    "Hard rejection after line {}: more than {} errors",
                    index + 1,
                    self.error_threshold
                );
                tally.reset();
                return IngestResult {
                    records: Vec::new(),
                    accepted: 0,
                    tally,
                    outcome: IngestOutcome::HardRejected,
                    report: format!(
                        "File rejected: more than {} lines contain errors",
                        self.error_threshold
                    ),
                };
            }
        }

        if accepted.is_empty() {
            let (outcome, message) = if lines.len() == 1 {
                (IngestOutcome::SingleEntryRejected, SINGLE_ENTRY_MESSAGE)
            } else {
                (IngestOutcome::AllLinesRejected, ALL_INVALID_MESSAGE)
            };

            let body = tally.report(false);
            let report = if body.is_empty() {
                message.to_string()
            } else {
                format!("{}\n{}", message, body)
            };

            return IngestResult {
                records: Vec::new(),
                accepted: 0,
                tally,
                outcome,
                report,
            };
        }

        let accepted_count = accepted.len();
        info!(
            "Run accepted {} of {} lines ({} rejected)",
            accepted_count,
            lines.len(),
            tally.total()
        );

        let report = if tally.is_empty() {
            format!("{} lines accepted with no errors", accepted_count)
        } else {
            tally.report(true)
        };

        let mut records = self.existing;
        records.extend(accepted);

        IngestResult {
            records,
            accepted: accepted_count,
            tally,
            outcome: IngestOutcome::Accepted,
            report,
        }
    }
}
