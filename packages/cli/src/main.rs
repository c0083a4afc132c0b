#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! CLI entry point for incident hotspot detection and insights.
//!
//! Loads records from a CSV/TSV/JSON file, runs the requested engine, and
//! prints the result as JSON on stdout. Logging goes to stderr and is
//! controlled with `RUST_LOG`.

mod config;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use incident_map_incident_models::GeoPoint;
use incident_map_ingest::{MemoryStore, RecordStore as _};
use incident_map_spatial_models::Bounds;
use serde::Serialize;

use crate::config::EngineConfig;

#[derive(Parser)]
#[command(name = "incident_map", about = "Incident hotspot and insight engine")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CommonArgs {
    /// Incident file to load (`.csv`, `.tsv`, or `.json`)
    #[arg(long, short, global = true)]
    input: Option<PathBuf>,
    /// TOML engine config; defaults are used for anything not set
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank grid cells by incident density
    Hotspots,
    /// Export hotspots as a `GeoJSON` `FeatureCollection`
    Geojson {
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Hour, weekday, month, category, and area statistics
    Insights,
    /// Records within a radius of a point
    Nearby {
        /// Latitude of the search center
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude of the search center
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Search radius in kilometers
        #[arg(long, default_value = "1.0")]
        radius: f64,
    },
    /// Group records around seed incidents
    Clusters {
        /// Grouping radius in kilometers (overrides the config value)
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Bounding box and centroid of the record set
    Bounds,
}

/// Bounding box plus centroid, for map framing.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Framing {
    bounds: Bounds,
    center: Option<GeoPoint>,
}

fn load_store(input: Option<&Path>) -> Result<MemoryStore, Box<dyn std::error::Error>> {
    let Some(path) = input else {
        return Err("--input is required".into());
    };

    let (store, rejected) = MemoryStore::open(path)?;
    if !rejected.is_empty() {
        log::warn!(
            "{} rows in {} failed validation and were skipped",
            rejected.len(),
            path.display()
        );
    }

    Ok(store)
}

fn to_json_string<T: Serialize + ?Sized>(
    value: &T,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<(), serde_json::Error> {
    println!("{}", to_json_string(value, pretty)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = EngineConfig::load(cli.common.config.as_deref())?;
    let store = load_store(cli.common.input.as_deref())?;
    let records = store.all_records();
    let pretty = cli.common.pretty;

    match cli.command {
        Commands::Hotspots => {
            let hotspots = incident_map_spatial::detect_hotspots(records, &config.hotspots);
            log::info!("Found {} hotspots in {} records", hotspots.len(), records.len());
            print_json(&hotspots, pretty)?;
        }
        Commands::Geojson { output } => {
            let hotspots = incident_map_spatial::detect_hotspots(records, &config.hotspots);
            let collection = incident_map_spatial::hotspots_to_geojson(&hotspots);
            let text = to_json_string(&collection, pretty)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, text)?;
                    log::info!(
                        "Wrote {} hotspot features to {}",
                        hotspots.len(),
                        path.display()
                    );
                }
                None => println!("{text}"),
            }
        }
        Commands::Insights => {
            let insights = incident_map_analytics::generate_insights(records);
            print_json(&insights, pretty)?;
        }
        Commands::Nearby { lat, lng, radius } => {
            let nearby = incident_map_spatial::find_nearby_records(records, lat, lng, radius);
            log::info!("{} records within {radius} km of ({lat}, {lng})", nearby.len());
            print_json(&nearby, pretty)?;
        }
        Commands::Clusters { radius } => {
            let radius = radius.unwrap_or(config.cluster_radius_km);
            let clusters = incident_map_spatial::cluster_records(records, radius);
            log::info!("Formed {} clusters at {radius} km", clusters.len());
            print_json(&clusters, pretty)?;
        }
        Commands::Bounds => {
            let framing = Framing {
                bounds: incident_map_spatial::calculate_bounds(
                    records,
                    config.hotspots.grid.region_bounds(),
                ),
                center: incident_map_spatial::get_center(records),
            };
            print_json(&framing, pretty)?;
        }
    }

    Ok(())
}
