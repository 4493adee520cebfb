use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{CONFIG_PATH, LAT_RANGE, LON_RANGE, SERVICES_CSV};
use crate::error::Result;

/// Runtime settings handed to the pipeline, so nothing in the transform
/// reaches for module-level globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// Dataset read and rewritten by the backfill
    pub dataset: PathBuf,
    /// Latitude bounds for derived coordinates
    pub lat_range: (f64, f64),
    /// Longitude bounds for derived coordinates
    pub lon_range: (f64, f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(SERVICES_CSV),
            lat_range: LAT_RANGE,
            lon_range: LON_RANGE,
        }
    }
}

/// Optional overrides picked up from config.toml when the file is present.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    dataset: Option<PathBuf>,
    lat_range: Option<(f64, f64)>,
    lon_range: Option<(f64, f64)>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        let overrides: ConfigFile = toml::from_str(&raw)?;

        let mut config = Self::default();
        if let Some(dataset) = overrides.dataset {
            config.dataset = dataset;
        }
        if let Some(lat_range) = overrides.lat_range {
            config.lat_range = lat_range;
        }
        if let Some(lon_range) = overrides.lon_range {
            config.lon_range = lon_range;
        }
        Ok(config)
    }
}
