//! Hotspot classification over populated grid cells.

use chrono::{DateTime, Utc};
use incident_map_incident_models::IncidentRecord;
use incident_map_spatial_models::{Hotspot, HotspotConfig, HotspotSeverity};

use crate::grid::{GridCell, partition_records};

/// Detects hotspots, stamping them with the current time.
///
/// See [`detect_hotspots_at`].
#[must_use]
pub fn detect_hotspots(records: &[IncidentRecord], config: &HotspotConfig) -> Vec<Hotspot> {
    detect_hotspots_at(records, config, Utc::now())
}

/// Partitions `records` over the configured grid and returns one hotspot
/// per populated cell, ranked by record count (highest first).
///
/// Cells with equal counts keep their row-major generation order. The
/// percentage of each hotspot is relative to the full input, including
/// records that fell outside the grid.
#[must_use]
pub fn detect_hotspots_at(
    records: &[IncidentRecord],
    config: &HotspotConfig,
    generated_at: DateTime<Utc>,
) -> Vec<Hotspot> {
    if records.is_empty() {
        return Vec::new();
    }

    let cells = partition_records(records, &config.grid);

    let mut hotspots: Vec<Hotspot> = cells
        .iter()
        .map(|cell| to_hotspot(cell, records.len(), config, generated_at))
        .collect();

    // `sort_by` is stable, which keeps generation order among ties.
    hotspots.sort_by(|a, b| b.count.cmp(&a.count));

    log::debug!(
        "Classified {} hotspots from {} records",
        hotspots.len(),
        records.len()
    );

    hotspots
}

#[allow(clippy::cast_precision_loss)]
fn to_hotspot(
    cell: &GridCell<'_>,
    total: usize,
    config: &HotspotConfig,
    generated_at: DateTime<Utc>,
) -> Hotspot {
    let count = cell.records.len();

    let name = most_frequent(
        cell.records
            .iter()
            .map(|r| r.area.trim())
            .filter(|area| !area.is_empty()),
    )
    .map_or_else(
        || format!("Grid {}-{}", cell.row, cell.col),
        ToString::to_string,
    );

    Hotspot {
        id: cell.id(),
        name,
        center: cell.center(),
        bounds: cell.bounds(),
        count,
        severity: HotspotSeverity::classify(count, &config.thresholds),
        percentage: count as f64 * 100.0 / total as f64,
        accident_count: cell.records.iter().filter(|r| r.is_accident).count(),
        sensitive_zone_count: cell.records.iter().filter(|r| r.is_sensitive_zone).count(),
        dominant_category: most_frequent(cell.records.iter().map(|r| r.category.as_str()))
            .map(ToString::to_string),
        generated_at,
    }
}

/// Most frequent value, ties going to whichever was seen first.
fn most_frequent<'a>(values: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, n) in counts {
        if best.is_none_or(|(_, best_n)| n > best_n) {
            best = Some((value, n));
        }
    }

    best.map(|(value, _)| value)
}
