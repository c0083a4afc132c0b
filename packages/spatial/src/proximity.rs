//! Radius search and seed-based grouping, independent of the grid.
//!
//! Both operations are plain all-pairs scans over the input slice.

use incident_map_incident_models::IncidentRecord;

use crate::distance::haversine_distance;

/// Default grouping radius for [`cluster_records`], in kilometers.
pub const DEFAULT_CLUSTER_RADIUS_KM: f64 = 0.5;

/// Returns every record within `radius_km` of the given point, boundary
/// inclusive, in input order.
#[must_use]
pub fn find_nearby_records(
    records: &[IncidentRecord],
    lat: f64,
    lng: f64,
    radius_km: f64,
) -> Vec<&IncidentRecord> {
    records
        .iter()
        .filter(|r| haversine_distance(lat, lng, r.latitude, r.longitude) <= radius_km)
        .collect()
}

/// Groups records around seed incidents.
///
/// Records are visited in input order. Each record not yet grouped becomes
/// the seed of a new group, which then takes every other ungrouped record
/// within `radius_km` of the seed. Members are not expanded further, so this
/// is a single-level grouping around each seed rather than a connected
/// component search.
///
/// Every record ends up in exactly one group. Groups are returned largest
/// first; equal sizes keep discovery order.
#[must_use]
pub fn cluster_records(records: &[IncidentRecord], radius_km: f64) -> Vec<Vec<&IncidentRecord>> {
    // Tracked by position rather than id, since ids are not guaranteed unique.
    let mut visited = vec![false; records.len()];
    let mut clusters = Vec::new();

    for (seed_idx, seed) in records.iter().enumerate() {
        if visited[seed_idx] {
            continue;
        }
        visited[seed_idx] = true;

        let mut cluster = vec![seed];

        for (idx, candidate) in records.iter().enumerate() {
            if visited[idx] {
                continue;
            }
            let distance = haversine_distance(
                seed.latitude,
                seed.longitude,
                candidate.latitude,
                candidate.longitude,
            );
            if distance <= radius_km {
                visited[idx] = true;
                cluster.push(candidate);
            }
        }

        clusters.push(cluster);
    }

    clusters.sort_by(|a, b| b.len().cmp(&a.len()));

    log::debug!(
        "Grouped {} records into {} clusters (radius {radius_km} km)",
        records.len(),
        clusters.len()
    );

    clusters
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(id: &str, lat: f64, lng: f64) -> IncidentRecord {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        IncidentRecord::new(id, "Theft", at, lat, lng)
    }

    fn ids<'a>(records: &[&'a IncidentRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn radius_search_respects_distance() {
        let records = vec![record("seed", 28.5355, 77.3910), record("near", 28.5360, 77.3920)];

        let wide = find_nearby_records(&records, 28.5355, 77.3910, 0.5);
        assert_eq!(ids(&wide), vec!["seed", "near"]);

        let narrow = find_nearby_records(&records, 28.5355, 77.3910, 0.01);
        assert_eq!(ids(&narrow), vec!["seed"]);
    }

    #[test]
    fn radius_search_boundary_is_inclusive() {
        let records = vec![record("a", 0.0, 0.0), record("b", 1.0, 0.0)];
        let exact = haversine_distance(0.0, 0.0, 1.0, 0.0);
        let found = find_nearby_records(&records, 0.0, 0.0, exact);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn empty_input_has_no_clusters() {
        assert!(cluster_records(&[], DEFAULT_CLUSTER_RADIUS_KM).is_empty());
    }

    #[test]
    fn clusters_partition_the_input() {
        let records = vec![
            record("a", 28.5355, 77.3910),
            record("far", 28.7000, 77.1000),
            record("b", 28.5360, 77.3920),
            record("c", 28.5350, 77.3905),
            record("far2", 28.7001, 77.1001),
            record("lonely", 28.4000, 77.5000),
        ];

        let clusters = cluster_records(&records, DEFAULT_CLUSTER_RADIUS_KM);

        let total: usize = clusters.iter().map(Vec::len).sum();
        assert_eq!(total, records.len());

        let mut seen: Vec<&str> = clusters.iter().flatten().map(|r| r.id.as_str()).collect();
        seen.sort_unstable();
        let mut expected: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        expected.sort_unstable();
        assert_eq!(seen, expected);

        assert_eq!(ids(&clusters[0]), vec!["a", "b", "c"]);
        assert_eq!(ids(&clusters[1]), vec!["far", "far2"]);
        assert_eq!(ids(&clusters[2]), vec!["lonely"]);
    }

    #[test]
    fn members_are_not_expanded_transitively() {
        // Points roughly 0.4 km apart along a meridian: b is near a and c,
        // but c is ~0.8 km from the seed a.
        let step = 0.4 / 111.195;
        let records = vec![
            record("a", 0.0, 0.0),
            record("b", step, 0.0),
            record("c", 2.0 * step, 0.0),
        ];

        let clusters = cluster_records(&records, DEFAULT_CLUSTER_RADIUS_KM);

        assert_eq!(clusters.len(), 2);
        assert_eq!(ids(&clusters[0]), vec!["a", "b"]);
        assert_eq!(ids(&clusters[1]), vec!["c"]);
    }

    #[test]
    fn duplicate_ids_are_still_partitioned() {
        let records = vec![record("dup", 0.0, 0.0), record("dup", 10.0, 10.0)];
        let clusters = cluster_records(&records, DEFAULT_CLUSTER_RADIUS_KM);
        assert_eq!(clusters.len(), 2);
        assert!(clusters.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn equal_sizes_keep_discovery_order() {
        let records = vec![
            record("first", 0.0, 0.0),
            record("second", 10.0, 10.0),
            record("third", 20.0, 20.0),
        ];
        let clusters = cluster_records(&records, DEFAULT_CLUSTER_RADIUS_KM);
        let seeds: Vec<&str> = clusters.iter().map(|c| c[0].id.as_str()).collect();
        assert_eq!(seeds, vec!["first", "second", "third"]);
    }
}
