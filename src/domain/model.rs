use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// One earthquake record decoded from the feed. Depth can be absent in the
/// source data; such quakes still render, colored by the catch-all bin.
#[derive(Debug, Clone, PartialEq)]
pub struct Earthquake {
    pub magnitude: f64,
    pub depth_km: Option<f64>,
    pub longitude: f64,
    pub latitude: f64,
    pub place: String,
    pub time: Option<DateTime<Utc>>,
}

/// Everything extract produces: decoded quakes, the optional boundary
/// geometry, and whatever went wrong along the way.
#[derive(Debug, Clone)]
pub struct FeedBundle {
    pub earthquakes: Vec<Earthquake>,
    pub skipped_features: usize,
    pub boundaries: Option<serde_json::Value>,
    pub warnings: Vec<String>,
}

/// A weighted heat sample, serialized as the `[lat, lng, weight]` triple
/// leaflet.heat consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatPoint(pub f64, pub f64, pub f64);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatLayer {
    pub points: Vec<HeatPoint>,
    pub radius: u32,
    pub blur: u32,
    pub max_zoom: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleMarker {
    pub lat: f64,
    pub lng: f64,
    pub radius: f64,
    pub fill_color: String,
    pub popup: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkerLayer {
    pub markers: Vec<CircleMarker>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryLayer {
    pub geometry: serde_json::Value,
    pub color: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    Heat(HeatLayer),
    Cluster(MarkerLayer),
    Circles(MarkerLayer),
    Boundary(BoundaryLayer),
}

/// Overlay registry. Insertion order is the order entries appear in the
/// rendered layer-selection control.
#[derive(Debug, Clone, Default)]
pub struct LayerSet {
    layers: IndexMap<String, Layer>,
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, layer: Layer) {
        self.layers.insert(name.into(), layer);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Layer)> {
        self.layers.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.layers.keys().map(|k| k.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Layer> {
        self.layers.get(name)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Transform output: all the data the renderer needs to emit the page.
#[derive(Debug, Clone)]
pub struct MapDocument {
    pub title: String,
    pub center: (f64, f64),
    pub zoom: u8,
    pub layers: LayerSet,
    pub legend_html: String,
    pub warnings: Vec<String>,
    pub skipped_features: usize,
}
