//! Fixed-size grid partitioning.
//!
//! Cells are generated row-major (latitude rows, longitude columns) from the
//! south-west corner. Each cell is half-open `[min, max)` on both axes, except
//! that the last row and last column are clamped to the region edge and
//! include it, so the cells tile the configured region exactly.
//!
//! Records are assigned by scanning cells in generation order and taking the
//! first one that contains the point. This is O(records × cells); keep it a
//! plain scan so shared-edge tie-breaking stays identical to generation order.

use geo::{Rect, coord};
use incident_map_incident_models::{GeoPoint, IncidentRecord};
use incident_map_spatial_models::{Bounds, GridConfig};

/// Absorbs float noise when dividing a span by a cell size, so that e.g.
/// `0.5 / 0.05` yields 10 steps rather than 11.
const STEP_EPSILON: f64 = 1e-9;

/// One rectangular cell of the grid and the records that fall inside it.
#[derive(Debug, Clone)]
pub struct GridCell<'a> {
    /// Zero-based latitude row, counted from the southern edge.
    pub row: usize,
    /// Zero-based longitude column, counted from the western edge.
    pub col: usize,
    /// Cell rectangle with `x` = longitude and `y` = latitude.
    pub rect: Rect<f64>,
    /// Records assigned to this cell, in input order.
    pub records: Vec<&'a IncidentRecord>,
    closed_north: bool,
    closed_east: bool,
}

impl GridCell<'_> {
    /// Stable identifier of the cell within its grid.
    #[must_use]
    pub fn id(&self) -> String {
        format!("cell-{}-{}", self.row, self.col)
    }

    /// Center of the cell.
    #[must_use]
    pub fn center(&self) -> GeoPoint {
        let center = self.rect.center();
        GeoPoint::new(center.y, center.x)
    }

    /// Cell rectangle as lat/lng [`Bounds`].
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.rect.min().y,
            self.rect.max().y,
            self.rect.min().x,
            self.rect.max().x,
        )
    }

    /// Whether the point lies inside this cell's half-open bounds.
    #[must_use]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        let min = self.rect.min();
        let max = self.rect.max();

        let lat_ok = lat >= min.y && (lat < max.y || (self.closed_north && lat <= max.y));
        let lng_ok = lng >= min.x && (lng < max.x || (self.closed_east && lng <= max.x));

        lat_ok && lng_ok
    }
}

/// Number of cells needed to cover `min..max` in steps of `size`.
///
/// Degenerate spans (non-positive size, `max <= min`, or non-finite values)
/// produce zero steps.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn step_count(min: f64, max: f64, size: f64) -> usize {
    let span = max - min;
    if !(size.is_finite() && span.is_finite() && size > 0.0 && span > 0.0) {
        return 0;
    }
    ((span / size) - STEP_EPSILON).ceil().max(1.0) as usize
}

/// Coordinate of the `index`-th grid line. Neighbouring cells share an edge
/// only if both sides compute it through this one expression.
#[allow(clippy::cast_precision_loss, clippy::suboptimal_flops)]
fn edge(min: f64, index: usize, size: f64) -> f64 {
    min + index as f64 * size
}

/// Generates every cell of the grid, in row-major order, with no records.
#[must_use]
pub fn generate_cells<'a>(grid: &GridConfig) -> Vec<GridCell<'a>> {
    let rows = step_count(grid.min_lat, grid.max_lat, grid.cell_height);
    let cols = step_count(grid.min_lng, grid.max_lng, grid.cell_width);

    let mut cells = Vec::with_capacity(rows * cols);

    for row in 0..rows {
        let last_row = row + 1 == rows;
        let south = edge(grid.min_lat, row, grid.cell_height);
        let north = if last_row {
            grid.max_lat
        } else {
            edge(grid.min_lat, row + 1, grid.cell_height)
        };

        for col in 0..cols {
            let last_col = col + 1 == cols;
            let west = edge(grid.min_lng, col, grid.cell_width);
            let east = if last_col {
                grid.max_lng
            } else {
                edge(grid.min_lng, col + 1, grid.cell_width)
            };

            cells.push(GridCell {
                row,
                col,
                rect: Rect::new(coord! { x: west, y: south }, coord! { x: east, y: north }),
                records: Vec::new(),
                closed_north: last_row,
                closed_east: last_col,
            });
        }
    }

    log::debug!("Generated {rows}x{cols} grid ({} cells)", cells.len());

    cells
}

/// Assigns each record to the first containing cell and returns only the
/// populated cells, still in generation order.
///
/// Records outside every cell are dropped without error.
#[must_use]
pub fn partition_records<'a>(records: &'a [IncidentRecord], grid: &GridConfig) -> Vec<GridCell<'a>> {
    let mut cells = generate_cells(grid);
    let mut outside = 0_usize;

    for record in records {
        match cells
            .iter_mut()
            .find(|cell| cell.contains(record.latitude, record.longitude))
        {
            Some(cell) => cell.records.push(record),
            None => outside += 1,
        }
    }

    if outside > 0 {
        log::debug!(
            "{outside} of {} records fell outside the grid region",
            records.len()
        );
    }

    cells.retain(|cell| !cell.records.is_empty());
    cells
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

    fn unit_grid() -> GridConfig {
        GridConfig {
            min_lat: 0.0,
            max_lat: 2.0,
            min_lng: 0.0,
            max_lng: 3.0,
            cell_height: 1.0,
            cell_width: 1.0,
        }
    }

    #[test]
    fn default_grid_has_expected_shape() {
        let cells = generate_cells(&GridConfig::default());
        // 0.5 deg of latitude by 0.8 deg of longitude in 0.05 deg steps.
        assert_eq!(cells.len(), 10 * 16);
        assert_eq!((cells[0].row, cells[0].col), (0, 0));
        assert_eq!((cells[1].row, cells[1].col), (0, 1));
        assert_eq!((cells[16].row, cells[16].col), (1, 0));
    }

    #[test]
    fn cells_are_row_major() {
        let cells = generate_cells(&unit_grid());
        let order: Vec<String> = cells.iter().map(GridCell::id).collect();
        assert_eq!(
            order,
            vec![
                "cell-0-0", "cell-0-1", "cell-0-2", "cell-1-0", "cell-1-1", "cell-1-2"
            ]
        );
    }

    #[test]
    fn partial_last_step_is_clamped_to_region() {
        let grid = GridConfig {
            max_lat: 1.5,
            ..unit_grid()
        };
        let cells = generate_cells(&grid);
        assert_eq!(cells.len(), 6);
        let top = &cells[3];
        assert!((top.rect.max().y - 1.5).abs() < f64::EPSILON);
        assert!(top.contains(1.5, 0.5));
        assert!(!top.contains(1.6, 0.5));
    }

    #[test]
    fn interior_edges_belong_to_the_next_cell() {
        let records = vec![record("edge", 1.0, 1.0)];
        let cells = partition_records(&records, &unit_grid());
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].id(), "cell-1-1");
    }

    #[test]
    fn outer_edges_are_inclusive() {
        let records = vec![record("corner", 2.0, 3.0)];
        let cells = partition_records(&records, &unit_grid());
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].id(), "cell-1-2");
    }

    #[test]
    fn records_outside_region_are_dropped() {
        let records = vec![
            record("in", 0.5, 0.5),
            record("south", -0.1, 0.5),
            record("east", 0.5, 3.01),
        ];
        let cells = partition_records(&records, &unit_grid());
        let assigned: usize = cells.iter().map(|c| c.records.len()).sum();
        assert_eq!(assigned, 1);
        assert_eq!(cells[0].records[0].id, "in");
    }

    #[test]
    fn empty_cells_are_removed() {
        let records = vec![record("a", 0.5, 2.5), record("b", 1.5, 0.5)];
        let cells = partition_records(&records, &unit_grid());
        let ids: Vec<String> = cells.iter().map(GridCell::id).collect();
        assert_eq!(ids, vec!["cell-0-2", "cell-1-0"]);
    }

    #[test]
    fn neighbouring_cells_share_exact_edges() {
        let grid = GridConfig {
            min_lat: 0.0,
            max_lat: 1.0,
            min_lng: 0.0,
            max_lng: 1.0,
            cell_height: 0.1,
            cell_width: 0.1,
        };
        let cells = generate_cells(&grid);
        assert_eq!(cells.len(), 100);

        for cell in &cells {
            if cell.col + 1 < 10 {
                let east = &cells[cell.row * 10 + cell.col + 1];
                assert_eq!(cell.rect.max().x.to_bits(), east.rect.min().x.to_bits());
            }
            if cell.row + 1 < 10 {
                let north = &cells[(cell.row + 1) * 10 + cell.col];
                assert_eq!(cell.rect.max().y.to_bits(), north.rect.min().y.to_bits());
            }
        }

        let records = vec![record("row-line", 0.6, 0.5), record("col-line", 0.5, 0.6)];
        let assigned: usize = partition_records(&records, &grid)
            .iter()
            .map(|c| c.records.len())
            .sum();
        assert_eq!(assigned, 2);
    }

    #[test]
    fn default_grid_leaves_no_gaps_on_column_lines() {
        let records: Vec<IncidentRecord> = [76.95, 77.2, 77.45, 76.949_999_999_999_99]
            .iter()
            .enumerate()
            .map(|(i, &lng)| record(&format!("r{i}"), 28.6, lng))
            .collect();
        let assigned: usize = partition_records(&records, &GridConfig::default())
            .iter()
            .map(|c| c.records.len())
            .sum();
        assert_eq!(assigned, records.len());
    }

    #[test]
    fn degenerate_config_has_no_cells() {
        let zero_size = GridConfig {
            cell_height: 0.0,
            ..unit_grid()
        };
        assert!(generate_cells(&zero_size).is_empty());

        let inverted = GridConfig {
            min_lat: 3.0,
            ..unit_grid()
        };
        assert!(generate_cells(&inverted).is_empty());
    }

    #[test]
    fn center_and_bounds_follow_rect() {
        let cells = generate_cells(&unit_grid());
        let cell = &cells[4];
        let center = cell.center();
        assert!((center.lat - 1.5).abs() < f64::EPSILON);
        assert!((center.lng - 1.5).abs() < f64::EPSILON);
        let bounds = cell.bounds();
        assert!((bounds.min_lat - 1.0).abs() < f64::EPSILON);
        assert!((bounds.max_lng - 2.0).abs() < f64::EPSILON);
    }
}
