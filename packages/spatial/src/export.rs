//! `GeoJSON` export of hotspots for map layers.
//!
//! Each hotspot becomes a polygon feature covering its grid cell, with the
//! ranking fields copied into the feature properties.

use geo::{Rect, coord};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, feature::Id};
use incident_map_spatial_models::Hotspot;

/// Converts ranked hotspots into a `FeatureCollection`, preserving order.
#[must_use]
pub fn hotspots_to_geojson(hotspots: &[Hotspot]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: hotspots.iter().map(to_feature).collect(),
        foreign_members: None,
    }
}

fn to_feature(hotspot: &Hotspot) -> Feature {
    let b = hotspot.bounds;
    let polygon = Rect::new(
        coord! { x: b.min_lng, y: b.min_lat },
        coord! { x: b.max_lng, y: b.max_lat },
    )
    .to_polygon();

    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), JsonValue::from(hotspot.name.clone()));
    properties.insert("count".to_string(), JsonValue::from(hotspot.count));
    properties.insert(
        "severity".to_string(),
        JsonValue::from(hotspot.severity.to_string()),
    );
    properties.insert("percentage".to_string(), JsonValue::from(hotspot.percentage));
    properties.insert("centerLat".to_string(), JsonValue::from(hotspot.center.lat));
    properties.insert("centerLng".to_string(), JsonValue::from(hotspot.center.lng));
    properties.insert(
        "accidentCount".to_string(),
        JsonValue::from(hotspot.accident_count),
    );
    properties.insert(
        "sensitiveZoneCount".to_string(),
        JsonValue::from(hotspot.sensitive_zone_count),
    );
    if let Some(category) = &hotspot.dominant_category {
        properties.insert(
            "dominantCategory".to_string(),
            JsonValue::from(category.clone()),
        );
    }
    properties.insert(
        "generatedAt".to_string(),
        JsonValue::from(hotspot.generated_at.to_rfc3339()),
    );

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geojson::Value::from(&polygon))),
        id: Some(Id::String(hotspot.id.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}
