//! Engine configuration loaded from an optional TOML file.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides:
//!
//! ```toml
//! clusterRadiusKm = 0.75
//!
//! [hotspots.grid]
//! minLat = 19.0
//! maxLat = 19.3
//!
//! [hotspots.thresholds]
//! medium = 8
//! high = 15
//! ```

use std::path::Path;

use incident_map_spatial::DEFAULT_CLUSTER_RADIUS_KM;
use incident_map_spatial_models::HotspotConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`EngineConfig`].
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// All tunables for one engine run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Grid and severity settings for hotspot detection.
    pub hotspots: HotspotConfig,
    /// Default grouping radius for clustering, in kilometers.
    pub cluster_radius_km: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hotspots: HotspotConfig::default(),
            cluster_radius_km: DEFAULT_CLUSTER_RADIUS_KM,
        }
    }
}

impl EngineConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text is not valid.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads the config at `path`, or the defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            log::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&text)?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
