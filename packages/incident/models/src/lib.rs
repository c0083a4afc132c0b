#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Incident record and coordinate types.
//!
//! [`IncidentRecord`] is the validated input shape consumed by every
//! engine in the workspace. Records are produced by the ingest layer and
//! are never mutated afterwards; the spatial and analytics engines only
//! borrow them.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    /// Latitude in degrees, `-90..=90`.
    pub lat: f64,
    /// Longitude in degrees, `-180..=180`.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a new point from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A single geotagged incident that has already passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    /// Unique incident identifier. Uniqueness is expected but not enforced.
    pub id: String,
    /// Free-text incident category (e.g. "Theft", "Assault").
    pub category: String,
    /// Local date and time the incident occurred.
    pub occurred_at: NaiveDateTime,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Named area (locality or neighborhood).
    pub area: String,
    /// Administrative zone.
    pub zone: String,
    /// Reporting police station.
    pub station: String,
    /// Whether the incident involved a traffic accident.
    pub is_accident: bool,
    /// Whether the incident happened in a designated sensitive zone.
    pub is_sensitive_zone: bool,
    /// Optional free-text description.
    pub description: Option<String>,
}

impl IncidentRecord {
    /// Creates a record with the required fields set and every descriptive
    /// field left empty.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        occurred_at: NaiveDateTime,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            occurred_at,
            latitude,
            longitude,
            area: String::new(),
            zone: String::new(),
            station: String::new(),
            is_accident: false,
            is_sensitive_zone: false,
            description: None,
        }
    }

    /// Sets the area name.
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Sets the zone name.
    #[must_use]
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = zone.into();
        self
    }

    /// Sets the station name.
    #[must_use]
    pub fn with_station(mut self, station: impl Into<String>) -> Self {
        self.station = station.into();
        self
    }

    /// Sets the accident and sensitive-zone flags.
    #[must_use]
    pub const fn with_flags(mut self, is_accident: bool, is_sensitive_zone: bool) -> Self {
        self.is_accident = is_accident;
        self.is_sensitive_zone = is_sensitive_zone;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The record's location as a [`GeoPoint`].
    #[must_use]
    pub const fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Hour of day (`0..=23`) the incident occurred.
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.occurred_at.hour()
    }

    /// Day of week the incident occurred.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.occurred_at.weekday()
    }

    /// Zero-based month (`0` = January) the incident occurred.
    #[must_use]
    pub fn month0(&self) -> u32 {
        self.occurred_at.month0()
    }
}
