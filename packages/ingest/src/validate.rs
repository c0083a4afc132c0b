//! Row validation into [`IncidentRecord`]s.
//!
//! Delimited files arrive as loosely typed [`RawIncident`] rows whose fields
//! are all optional strings. Validation trims every field, requires the
//! identifying fields, parses the timestamp and coordinates, and range
//! checks latitude and longitude. JSON input is already typed and only goes
//! through [`check_record`].

use chrono::NaiveDateTime;
use incident_map_incident_models::IncidentRecord;
use serde::Deserialize;
use thiserror::Error;

use crate::parsing::{parse_coordinate, parse_date, parse_flag, parse_time};

/// Why a single row was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field was missing or blank.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A field could not be parsed.
    #[error("invalid {field} '{value}'")]
    InvalidField {
        /// Field name.
        field: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },

    /// Latitude outside `-90..=90`.
    #[error("latitude {0} out of range")]
    LatitudeOutOfRange(f64),

    /// Longitude outside `-180..=180`.
    #[error("longitude {0} out of range")]
    LongitudeOutOfRange(f64),

    /// The row could not be mapped onto the expected columns.
    #[error("malformed row: {0}")]
    Malformed(String),
}

/// An incident row as read from a delimited file, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawIncident {
    /// Incident identifier.
    #[serde(alias = "incident_id", alias = "ID")]
    pub id: Option<String>,
    /// Category label.
    #[serde(alias = "crime_type", alias = "type")]
    pub category: Option<String>,
    /// Calendar date.
    pub date: Option<String>,
    /// Time of day.
    pub time: Option<String>,
    /// Latitude in degrees.
    #[serde(alias = "lat")]
    pub latitude: Option<String>,
    /// Longitude in degrees.
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: Option<String>,
    /// Area name.
    pub area: Option<String>,
    /// Zone name.
    pub zone: Option<String>,
    /// Police station.
    #[serde(alias = "police_station")]
    pub station: Option<String>,
    /// Accident flag.
    #[serde(alias = "is_accident")]
    pub accident: Option<String>,
    /// Sensitive-zone flag.
    #[serde(alias = "is_sensitive_zone")]
    pub sensitive_zone: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
}

fn trimmed(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn required<'a>(value: Option<&'a String>, field: &'static str) -> Result<&'a str, ValidationError> {
    trimmed(value).ok_or(ValidationError::MissingField(field))
}

fn flag(value: Option<&String>, field: &'static str) -> Result<bool, ValidationError> {
    let raw = value.map_or("", String::as_str);
    parse_flag(raw).ok_or_else(|| ValidationError::InvalidField {
        field,
        value: raw.to_string(),
    })
}

fn coordinate(value: Option<&String>, field: &'static str) -> Result<f64, ValidationError> {
    let raw = required(value, field)?;
    parse_coordinate(raw).ok_or_else(|| ValidationError::InvalidField {
        field,
        value: raw.to_string(),
    })
}

impl RawIncident {
    /// Validates and converts this row into an [`IncidentRecord`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn into_record(self) -> Result<IncidentRecord, ValidationError> {
        let id = required(self.id.as_ref(), "id")?;
        let category = required(self.category.as_ref(), "category")?;

        let date_raw = required(self.date.as_ref(), "date")?;
        let date = parse_date(date_raw).ok_or_else(|| ValidationError::InvalidField {
            field: "date",
            value: date_raw.to_string(),
        })?;
        let time_raw = required(self.time.as_ref(), "time")?;
        let time = parse_time(time_raw).ok_or_else(|| ValidationError::InvalidField {
            field: "time",
            value: time_raw.to_string(),
        })?;

        let latitude = coordinate(self.latitude.as_ref(), "latitude")?;
        let longitude = coordinate(self.longitude.as_ref(), "longitude")?;

        let record = IncidentRecord {
            id: id.to_string(),
            category: category.to_string(),
            occurred_at: NaiveDateTime::new(date, time),
            latitude,
            longitude,
            area: trimmed(self.area.as_ref()).unwrap_or_default().to_string(),
            zone: trimmed(self.zone.as_ref()).unwrap_or_default().to_string(),
            station: trimmed(self.station.as_ref()).unwrap_or_default().to_string(),
            is_accident: flag(self.accident.as_ref(), "accident")?,
            is_sensitive_zone: flag(self.sensitive_zone.as_ref(), "sensitive_zone")?,
            description: trimmed(self.description.as_ref()).map(ToString::to_string),
        };

        check_record(&record)?;
        Ok(record)
    }
}

/// Checks the invariants every record must satisfy before it reaches the
/// engines: non-blank id and category, finite in-range coordinates.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn check_record(record: &IncidentRecord) -> Result<(), ValidationError> {
    if record.id.trim().is_empty() {
        return Err(ValidationError::MissingField("id"));
    }
    if record.category.trim().is_empty() {
        return Err(ValidationError::MissingField("category"));
    }
    if !(-90.0..=90.0).contains(&record.latitude) {
        return Err(ValidationError::LatitudeOutOfRange(record.latitude));
    }
    if !(-180.0..=180.0).contains(&record.longitude) {
        return Err(ValidationError::LongitudeOutOfRange(record.longitude));
    }
    Ok(())
}
