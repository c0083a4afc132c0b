#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Grid configuration, bounds, and hotspot output types.
//!
//! Configuration values here are plain data passed into each engine call.
//! Nothing in this crate is global, so several regions can be analysed
//! side by side with different grids and thresholds.

use chrono::{DateTime, Utc};
use incident_map_incident_models::GeoPoint;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Southern edge of the default operational region.
pub const DEFAULT_MIN_LAT: f64 = 28.40;
/// Northern edge of the default operational region.
pub const DEFAULT_MAX_LAT: f64 = 28.90;
/// Western edge of the default operational region.
pub const DEFAULT_MIN_LNG: f64 = 76.80;
/// Eastern edge of the default operational region.
pub const DEFAULT_MAX_LNG: f64 = 77.60;
/// Default cell edge in degrees (~5 km at the equator).
pub const DEFAULT_CELL_SIZE_DEG: f64 = 0.05;

/// A latitude/longitude bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    /// Southern latitude boundary.
    pub min_lat: f64,
    /// Northern latitude boundary.
    pub max_lat: f64,
    /// Western longitude boundary.
    pub min_lng: f64,
    /// Eastern longitude boundary.
    pub max_lng: f64,
}

impl Bounds {
    /// Creates a new bounding box.
    #[must_use]
    pub const fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Geometric midpoint of the box.
    #[must_use]
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            f64::midpoint(self.min_lat, self.max_lat),
            f64::midpoint(self.min_lng, self.max_lng),
        )
    }
}

/// Grid partitioning parameters, all in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Southern edge of the gridded region.
    pub min_lat: f64,
    /// Northern edge of the gridded region.
    pub max_lat: f64,
    /// Western edge of the gridded region.
    pub min_lng: f64,
    /// Eastern edge of the gridded region.
    pub max_lng: f64,
    /// Height of each cell (latitude step).
    pub cell_height: f64,
    /// Width of each cell (longitude step).
    pub cell_width: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_lat: DEFAULT_MIN_LAT,
            max_lat: DEFAULT_MAX_LAT,
            min_lng: DEFAULT_MIN_LNG,
            max_lng: DEFAULT_MAX_LNG,
            cell_height: DEFAULT_CELL_SIZE_DEG,
            cell_width: DEFAULT_CELL_SIZE_DEG,
        }
    }
}

impl GridConfig {
    /// The whole gridded region as a [`Bounds`].
    #[must_use]
    pub const fn region_bounds(&self) -> Bounds {
        Bounds::new(self.min_lat, self.max_lat, self.min_lng, self.max_lng)
    }
}

/// Minimum record counts for the medium and high severity tiers.
///
/// Cells below `medium` are classified [`HotspotSeverity::Low`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeverityThresholds {
    /// Count at or above which a cell is medium severity.
    pub medium: usize,
    /// Count at or above which a cell is high severity.
    pub high: usize,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            medium: 5,
            high: 10,
        }
    }
}

/// Everything hotspot detection needs besides the records themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HotspotConfig {
    /// Grid layout.
    pub grid: GridConfig,
    /// Severity tier thresholds.
    pub thresholds: SeverityThresholds,
}

/// Severity tier assigned to a hotspot by its record count.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HotspotSeverity {
    /// Below the medium threshold.
    Low,
    /// At or above the medium threshold.
    Medium,
    /// At or above the high threshold.
    High,
}

impl HotspotSeverity {
    /// Classifies a record count against the given thresholds.
    #[must_use]
    pub const fn classify(count: usize, thresholds: &SeverityThresholds) -> Self {
        if count >= thresholds.high {
            Self::High
        } else if count >= thresholds.medium {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// A populated grid cell, ranked and labelled for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    /// Stable cell identifier (`cell-<row>-<col>`).
    pub id: String,
    /// Display name, usually the dominant area name inside the cell.
    pub name: String,
    /// Center of the grid cell.
    pub center: GeoPoint,
    /// Cell rectangle.
    pub bounds: Bounds,
    /// Number of records inside the cell.
    pub count: usize,
    /// Severity tier.
    pub severity: HotspotSeverity,
    /// Share of the full input set, `0.0..=100.0`.
    pub percentage: f64,
    /// Records in the cell flagged as accidents.
    pub accident_count: usize,
    /// Records in the cell flagged as sensitive-zone incidents.
    pub sensitive_zone_count: usize,
    /// Most frequent category in the cell.
    pub dominant_category: Option<String>,
    /// When this snapshot was produced.
    pub generated_at: DateTime<Utc>,
}
