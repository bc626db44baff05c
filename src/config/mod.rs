pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_range,
    validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const USGS_ALL_DAY_FEED: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";
pub const TECTONIC_PLATES_FEED: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "quakemap"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Render an interactive earthquake map from live GeoJSON feeds")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = USGS_ALL_DAY_FEED))]
    pub earthquake_endpoint: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = TECTONIC_PLATES_FEED))]
    pub boundary_endpoint: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./output"))]
    pub output_path: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "Earthquake Map"))]
    pub map_title: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "0.0"))]
    pub center_lat: f64,

    #[cfg_attr(feature = "cli", arg(long, default_value = "0.0"))]
    pub center_lng: f64,

    #[cfg_attr(feature = "cli", arg(long, default_value = "2"))]
    pub map_zoom: u8,

    #[cfg_attr(feature = "cli", arg(long, default_value = "30"))]
    pub timeout_seconds: u64,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "Path to a TOML config file that replaces the flags")
    )]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub log_json: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Report system resource usage"))]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn earthquake_endpoint(&self) -> &str {
        &self.earthquake_endpoint
    }

    fn boundary_endpoint(&self) -> &str {
        &self.boundary_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn map_title(&self) -> &str {
        &self.map_title
    }

    fn map_center(&self) -> (f64, f64) {
        (self.center_lat, self.center_lng)
    }

    fn map_zoom(&self) -> u8 {
        self.map_zoom
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("earthquake_endpoint", &self.earthquake_endpoint)?;
        validate_url("boundary_endpoint", &self.boundary_endpoint)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("map_title", &self.map_title)?;
        validate_range("center_lat", self.center_lat, -90.0, 90.0)?;
        validate_range("center_lng", self.center_lng, -180.0, 180.0)?;
        validate_range("map_zoom", self.map_zoom, 0, 19)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
