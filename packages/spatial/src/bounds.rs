//! Bounding box and centroid over a record set, for map framing.

use incident_map_incident_models::{GeoPoint, IncidentRecord};
use incident_map_spatial_models::Bounds;

/// Min/max latitude and longitude across `records`.
///
/// An empty set returns `default_region` so callers never have to special
/// case emptiness when framing a map.
#[must_use]
pub fn calculate_bounds(records: &[IncidentRecord], default_region: Bounds) -> Bounds {
    let Some((first, rest)) = records.split_first() else {
        return default_region;
    };

    rest.iter().fold(
        Bounds::new(first.latitude, first.latitude, first.longitude, first.longitude),
        |acc, r| {
            Bounds::new(
                acc.min_lat.min(r.latitude),
                acc.max_lat.max(r.latitude),
                acc.min_lng.min(r.longitude),
                acc.max_lng.max(r.longitude),
            )
        },
    )
}

/// Arithmetic mean of latitude and longitude, or `None` for an empty set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn get_center(records: &[IncidentRecord]) -> Option<GeoPoint> {
    if records.is_empty() {
        return None;
    }

    let n = records.len() as f64;
    let (lat_sum, lng_sum) = records
        .iter()
        .fold((0.0, 0.0), |(lat, lng), r| (lat + r.latitude, lng + r.longitude));

    Some(GeoPoint::new(lat_sum / n, lng_sum / n))
}
