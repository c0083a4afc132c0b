#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Incident import and in-memory record store.
//!
//! Reads incident files (CSV, TSV, or JSON), validates every row into an
//! [`IncidentRecord`], and keeps the accepted records in a [`MemoryStore`]
//! that hands the full set to the spatial and analytics engines on demand.
//! Rows that fail validation are reported, not fatal.

pub mod csv_import;
pub mod json_import;
pub mod parsing;
pub mod store;
pub mod validate;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use incident_map_incident_models::IncidentRecord;
use thiserror::Error;

pub use store::{MemoryStore, RecordStore};
pub use validate::ValidationError;

/// Errors that abort an import.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited input was structurally malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The JSON input could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not map to a known format.
    #[error("Unsupported input format: {path}")]
    UnsupportedFormat {
        /// Path that was given.
        path: String,
    },
}

/// A row that was skipped because it failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// 1-based line number for delimited input, 1-based element position
    /// for JSON input.
    pub row: u64,
    /// Why the row was rejected.
    pub reason: ValidationError,
}

/// Accepted records plus the rows that were rejected along the way.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Validated records, in input order.
    pub records: Vec<IncidentRecord>,
    /// Rejected rows, in input order.
    pub rejected: Vec<Rejection>,
}

impl ImportReport {
    fn accept(&mut self, result: Result<IncidentRecord, ValidationError>, row: u64) {
        match result {
            Ok(record) => self.records.push(record),
            Err(reason) => {
                log::warn!("Rejected row {row}: {reason}");
                self.rejected.push(Rejection { row, reason });
            }
        }
    }
}

/// Imports a file, picking the format from its extension (`csv`, `tsv`,
/// or `json`).
///
/// # Errors
///
/// Returns [`IngestError`] if the file cannot be read, is structurally
/// malformed, or has an unrecognised extension.
pub fn import_path(path: &Path) -> Result<ImportReport, IngestError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let report = match extension.as_deref() {
        Some("csv") => csv_import::read_delimited(File::open(path)?, b',')?,
        Some("tsv") => csv_import::read_delimited(File::open(path)?, b'\t')?,
        Some("json") => json_import::read_json(BufReader::new(File::open(path)?))?,
        _ => {
            return Err(IngestError::UnsupportedFormat {
                path: path.display().to_string(),
            });
        }
    };

    log::info!(
        "Imported {} records from {} ({} rejected)",
        report.records.len(),
        path.display(),
        report.rejected.len()
    );

    Ok(report)
}
