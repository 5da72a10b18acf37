//! Error accounting for one ingestion run
//!
//! Tracks how many times each error code occurred and renders the run's
//! error report. One tally lives exactly as long as one run; it is never
//! shared between runs.

use serde::Serialize;

/// Per-run error registry
///
/// Constructed from an entity kind's message table; the table length fixes
/// the valid code range. Codes outside the range are ignored on registration
/// and leave the running total untouched. Callers must not rely on that for
/// bounds checking.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorTally {
    /// Occurrence count per error code
    counts: Vec<u64>,

    /// Total number of registered errors (equals rejected lines, since each
    /// invalid line registers exactly one code)
    total: u64,

    /// Human-readable message per code, in code order
    #[serde(skip)]
    messages: &'static [&'static str],
}

impl ErrorTally {
    /// Create an empty tally over the given message table
    pub fn new(messages: &'static [&'static str]) -> Self {
        Self {
            counts: vec![0; messages.len()],
            total: 0,
            messages,
        }
    }

    /// Record one occurrence of an error code
    pub fn register(&mut self, code: usize) {
        if let Some(count) = self.counts.get_mut(code) {
            *count += 1;
            self.total += 1;
        }
    }

    /// Total errors registered so far
    pub fn total(&self) -> usize {
        self.total as usize
    }

    /// Occurrences of one code (0 for out-of-range codes)
    pub fn count(&self, code: usize) -> usize {
        self.counts.get(code).copied().unwrap_or(0) as usize
    }

    /// Whether no error has been registered
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Discard all recorded occurrences
    pub fn reset(&mut self) {
        self.counts.fill(0);
        self.total = 0;
    }

    /// Render the report: one line per code with at least one occurrence,
    /// ascending code order, optionally preceded by the rejected-line count
    pub fn report(&self, include_header: bool) -> String {
        let mut lines = Vec::new();

        if include_header {
            lines.push(format!("{} lines were rejected", self.total));
        }

        for (code, &count) in self.counts.iter().enumerate() {
            if count > 0 {
                lines.push(format!(
                    "Error [{}] {}: {} occurrences",
                    code, self.messages[code], count
                ));
            }
        }

        lines.join("\n")
    }
}
