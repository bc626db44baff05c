//! Feed decoding: raw GeoJSON into domain records.
//!
//! The earthquake feed is noisy. Features without a numeric magnitude or with
//! coordinates that cannot be placed on the map are skipped and counted; a
//! missing depth alone keeps the quake, which then colors as the catch-all
//! bin downstream.

use crate::domain::model::Earthquake;
use crate::utils::error::{MapError, Result};
use chrono::{DateTime, Utc};
use geojson::{GeoJson, Value as GeomValue};

/// Decode the earthquake feed body into quakes plus a skipped-feature count.
pub fn decode_earthquakes(value: serde_json::Value) -> Result<(Vec<Earthquake>, usize)> {
    let collection = match GeoJson::from_json_value(value)? {
        GeoJson::FeatureCollection(collection) => collection,
        _ => {
            return Err(MapError::ProcessingError {
                message: "earthquake feed did not return a FeatureCollection".to_string(),
            })
        }
    };

    let mut quakes = Vec::with_capacity(collection.features.len());
    let mut skipped = 0;
    for feature in &collection.features {
        match earthquake_from_feature(feature) {
            Some(quake) => quakes.push(quake),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::warn!(
            "Skipped {} malformed feature(s) from the earthquake feed",
            skipped
        );
    }

    Ok((quakes, skipped))
}

/// Check that the boundary feed body is valid GeoJSON before it gets embedded
/// verbatim in the page.
pub fn validate_boundaries(value: &serde_json::Value) -> Result<()> {
    GeoJson::from_json_value(value.clone())?;
    Ok(())
}

fn earthquake_from_feature(feature: &geojson::Feature) -> Option<Earthquake> {
    let geometry = feature.geometry.as_ref()?;
    let coords = match &geometry.value {
        GeomValue::Point(coords) => coords,
        _ => return None,
    };

    let longitude = *coords.first()?;
    let latitude = *coords.get(1)?;
    if !(-180.0..=180.0).contains(&longitude) || !(-90.0..=90.0).contains(&latitude) {
        return None;
    }

    // coordinates[2] is depth in km; absent or non-finite means unknown
    let depth_km = coords.get(2).copied().filter(|d| d.is_finite());

    let properties = feature.properties.as_ref()?;
    let magnitude = properties.get("mag").and_then(|v| v.as_f64())?;
    if !magnitude.is_finite() {
        return None;
    }

    let place = properties
        .get("place")
        .and_then(|v| v.as_str())
        .unwrap_or("Unknown location")
        .to_string();

    let time = properties
        .get("time")
        .and_then(|v| v.as_i64())
        .and_then(DateTime::<Utc>::from_timestamp_millis);

    Some(Earthquake {
        magnitude,
        depth_km,
        longitude,
        latitude,
        place,
        time,
    })
}
