//! JSON import.
//!
//! Expects a top-level array of records in the same camelCase shape that
//! [`IncidentRecord`] serializes to. Elements that deserialize but violate a
//! range check are rejected individually.

use std::io::Read;

use incident_map_incident_models::IncidentRecord;

use crate::validate::check_record;
use crate::{ImportReport, IngestError};

/// Reads a JSON array of records from `reader`.
///
/// # Errors
///
/// Returns [`IngestError::Json`] if the input is not an array of records.
pub fn read_json<R: Read>(reader: R) -> Result<ImportReport, IngestError> {
    let records: Vec<IncidentRecord> = serde_json::from_reader(reader)?;
    let mut report = ImportReport::default();

    for (position, record) in (1_u64..).zip(records) {
        let result = check_record(&record).map(|()| record);
        report.accept(result, position);
    }

    Ok(report)
}
