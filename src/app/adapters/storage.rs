//! Storage collaborator boundary
//!
//! The pipeline never persists records itself; it hands each successfully
//! validated record set to a [`Storage`] implementation, keyed by entity kind
//! and filename. The in-memory implementation backs the CLI and the tests.

use crate::app::models::{EntityKind, RecordSet};
use std::collections::HashMap;

/// Sink for validated record sets
///
/// Called once per successful load; the pipeline does not retry or batch
/// these calls, and never calls this for a run that ended in rejection.
pub trait Storage {
    /// Store a record set under the given kind and filename
    fn set_data(&mut self, records: RecordSet, kind: EntityKind, filename: &str);
}

/// In-memory storage keyed by (kind, filename)
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    tables: HashMap<(EntityKind, String), RecordSet>,
}

impl InMemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the record set stored for a kind and filename
    pub fn get(&self, kind: EntityKind, filename: &str) -> Option<&RecordSet> {
        self.tables.get(&(kind, filename.to_string()))
    }

    /// Number of stored (kind, filename) tables
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Total records across all tables of one kind
    pub fn record_count(&self, kind: EntityKind) -> usize {
        self.tables
            .iter()
            .filter(|((k, _), _)| *k == kind)
            .map(|(_, set)| set.len())
            .sum()
    }
}

impl Storage for InMemoryStorage {
    fn set_data(&mut self, records: RecordSet, kind: EntityKind, filename: &str) {
        self.tables.insert((kind, filename.to_string()), records);
    }
}
