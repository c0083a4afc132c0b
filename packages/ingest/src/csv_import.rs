//! Delimited-text import (CSV, TSV).
//!
//! The first row must be a header. Columns are matched by name (see
//! [`RawIncident`] for accepted names and aliases); unknown columns are
//! ignored and missing optional columns read as empty.

use std::io::Read;

use crate::validate::{RawIncident, ValidationError};
use crate::{ImportReport, IngestError};

/// Reads delimited rows from `reader`, validating each into a record.
///
/// # Errors
///
/// Returns [`IngestError`] if the input cannot be read or is not valid
/// delimited text. Rows that parse but fail validation are collected in
/// [`ImportReport::rejected`] instead.
pub fn read_delimited<R: Read>(reader: R, delimiter: u8) -> Result<ImportReport, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut row = csv::StringRecord::new();
    let mut report = ImportReport::default();

    while reader.read_record(&mut row)? {
        let line = row.position().map_or(0, csv::Position::line);

        let result = row
            .deserialize::<RawIncident>(Some(&headers))
            .map_err(|e| ValidationError::Malformed(e.to_string()))
            .and_then(RawIncident::into_record);

        report.accept(result, line);
    }

    log::debug!(
        "Read {} delimited rows ({} rejected)",
        report.records.len() + report.rejected.len(),
        report.rejected.len()
    );

    Ok(report)
}
