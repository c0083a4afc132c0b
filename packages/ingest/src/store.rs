//! Record store.
//!
//! The engines never load data themselves; they borrow the full record set
//! from a [`RecordStore`].

use std::path::Path;

use incident_map_incident_models::IncidentRecord;

use crate::{ImportReport, IngestError, Rejection, import_path};

/// Supplies the full, validated record set on demand.
pub trait RecordStore {
    /// All records currently held, in insertion order.
    fn all_records(&self) -> &[IncidentRecord];

    /// Number of records held.
    fn len(&self) -> usize {
        self.all_records().len()
    }

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.all_records().is_empty()
    }
}

/// A [`RecordStore`] backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<IncidentRecord>,
}

impl MemoryStore {
    /// Creates a store holding `records`.
    #[must_use]
    pub const fn new(records: Vec<IncidentRecord>) -> Self {
        Self { records }
    }

    /// Imports `path` and keeps the accepted records. Rejected rows are
    /// returned alongside so callers can surface them.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError`] if the import fails.
    pub fn open(path: &Path) -> Result<(Self, Vec<Rejection>), IngestError> {
        let report = import_path(path)?;
        Ok((Self::new(report.records), report.rejected))
    }

    /// Appends records to the store.
    pub fn extend(&mut self, records: impl IntoIterator<Item = IncidentRecord>) {
        self.records.extend(records);
    }
}

impl RecordStore for MemoryStore {
    fn all_records(&self) -> &[IncidentRecord] {
        &self.records
    }
}

impl From<ImportReport> for MemoryStore {
    fn from(report: ImportReport) -> Self {
        Self::new(report.records)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(id: &str) -> IncidentRecord {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        IncidentRecord::new(id, "Theft", at, 28.5, 77.3)
    }

    #[test]
    fn store_hands_back_records_in_order() {
        let mut store = MemoryStore::new(vec![record("a")]);
        store.extend([record("b"), record("c")]);

        assert_eq!(store.len(), 3);
        let ids: Vec<&str> = store.all_records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn default_store_is_empty() {
        let store = MemoryStore::default();
        assert!(store.is_empty());
        assert!(store.all_records().is_empty());
    }

    #[test]
    fn converts_from_import_report() {
        let report = ImportReport {
            records: vec![record("x")],
            rejected: Vec::new(),
        };
        let store = MemoryStore::from(report);
        assert_eq!(store.len(), 1);
    }
}
