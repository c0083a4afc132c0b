#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Spatial engine for incident records.
//!
//! Partitions a bounding region into a fixed grid and ranks the populated
//! cells as hotspots, answers radius queries, groups records around seed
//! incidents, and computes bounds and centroids for map framing.
//!
//! Every function here is a pure, synchronous function of its inputs. The
//! grid assignment and the proximity scans are deliberately linear: the
//! expected record sets are in the hundreds to low thousands.

pub mod bounds;
pub mod distance;
pub mod export;
pub mod grid;
pub mod hotspots;
pub mod proximity;

pub use bounds::{calculate_bounds, get_center};
pub use distance::{EARTH_RADIUS_KM, haversine_distance};
pub use export::hotspots_to_geojson;
pub use grid::{GridCell, generate_cells, partition_records};
pub use hotspots::{detect_hotspots, detect_hotspots_at};
pub use proximity::{DEFAULT_CLUSTER_RADIUS_KM, cluster_records, find_nearby_records};
