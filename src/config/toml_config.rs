use crate::config::{TECTONIC_PLATES_FEED, USGS_ALL_DAY_FEED};
use crate::core::ConfigProvider;
use crate::utils::error::{MapError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_range,
    validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub map: MapSection,
    pub feeds: FeedsSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSection {
    pub title: String,
    pub center: [f64; 2],
    pub zoom: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedsSection {
    pub earthquakes: Option<String>,
    pub boundaries: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: String,
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_str(&raw)
    }

    pub fn from_str(raw: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(raw).map_err(|e| MapError::ConfigError {
            message: format!("invalid TOML config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn earthquake_endpoint(&self) -> &str {
        self.feeds
            .earthquakes
            .as_deref()
            .unwrap_or(USGS_ALL_DAY_FEED)
    }

    fn boundary_endpoint(&self) -> &str {
        self.feeds
            .boundaries
            .as_deref()
            .unwrap_or(TECTONIC_PLATES_FEED)
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn map_title(&self) -> &str {
        &self.map.title
    }

    fn map_center(&self) -> (f64, f64) {
        (self.map.center[0], self.map.center[1])
    }

    fn map_zoom(&self) -> u8 {
        self.map.zoom
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.feeds
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("map.title", &self.map.title)?;
        validate_range("map.center[0]", self.map.center[0], -90.0, 90.0)?;
        validate_range("map.center[1]", self.map.center[1], -180.0, 180.0)?;
        validate_range("map.zoom", self.map.zoom, 0, 19)?;

        if let Some(url) = &self.feeds.earthquakes {
            validate_url("feeds.earthquakes", url)?;
        }
        if let Some(url) = &self.feeds.boundaries {
            validate_url("feeds.boundaries", url)?;
        }
        if let Some(timeout) = self.feeds.timeout_seconds {
            validate_positive_number("feeds.timeout_seconds", timeout, 1)?;
        }

        validate_path("output.path", &self.output.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [map]
        title = "Pacific Rim Earthquakes"
        center = [35.6, 139.7]
        zoom = 4

        [feeds]
        earthquakes = "https://example.com/quakes.geojson"
        timeout_seconds = 10

        [output]
        path = "./site"
    "#;

    #[test]
    fn test_parses_and_validates_sample() {
        let config = TomlConfig::from_str(SAMPLE).unwrap();
        assert_eq!(config.map_title(), "Pacific Rim Earthquakes");
        assert_eq!(config.map_center(), (35.6, 139.7));
        assert_eq!(config.map_zoom(), 4);
        assert_eq!(config.earthquake_endpoint(), "https://example.com/quakes.geojson");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_missing_feeds_fall_back_to_defaults() {
        let config = TomlConfig::from_str(
            r#"
            [map]
            title = "Quakes"
            center = [0.0, 0.0]
            zoom = 2

            [feeds]

            [output]
            path = "./output"
        "#,
        )
        .unwrap();

        assert_eq!(config.earthquake_endpoint(), USGS_ALL_DAY_FEED);
        assert_eq!(config.boundary_endpoint(), TECTONIC_PLATES_FEED);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_rejects_out_of_range_center() {
        let raw = SAMPLE.replace("[35.6, 139.7]", "[95.0, 139.7]");
        assert!(TomlConfig::from_str(&raw).is_err());
    }

    #[test]
    fn test_rejects_invalid_feed_url() {
        let raw = SAMPLE.replace("https://example.com/quakes.geojson", "nope");
        assert!(TomlConfig::from_str(&raw).is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(TomlConfig::from_str("not toml at all [").is_err());
    }
}
