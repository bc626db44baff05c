//! Layer builders: heat, point (clustered + flat), and boundary layers.

use crate::core::encoding::{color_for, radius_for};
use crate::domain::model::{
    BoundaryLayer, CircleMarker, Earthquake, HeatLayer, HeatPoint, MarkerLayer,
};

pub const HEATMAP_LAYER: &str = "Heatmap";
pub const MARKERS_LAYER: &str = "Markers";
pub const CIRCLES_LAYER: &str = "Circles";
pub const PLATES_LAYER: &str = "Tectonic Plates";

const HEAT_RADIUS: u32 = 25;
const HEAT_BLUR: u32 = 15;
const HEAT_MAX_ZOOM: u32 = 17;

const BOUNDARY_COLOR: &str = "navy";
const BOUNDARY_WEIGHT: u32 = 2;

/// The same markers backing the clustered view and the flat, individually
/// toggleable circle group.
#[derive(Debug, Clone)]
pub struct PointLayers {
    pub cluster: MarkerLayer,
    pub circles: MarkerLayer,
}

/// Weighted density samples in input order. Every quake contributes, a
/// magnitude of zero simply adds a zero-weight sample.
pub fn build_heat_layer(quakes: &[Earthquake]) -> HeatLayer {
    HeatLayer {
        points: quakes
            .iter()
            .map(|q| HeatPoint(q.latitude, q.longitude, q.magnitude))
            .collect(),
        radius: HEAT_RADIUS,
        blur: HEAT_BLUR,
        max_zoom: HEAT_MAX_ZOOM,
    }
}

/// One circle marker per quake, input order preserved in both views.
pub fn build_point_layers(quakes: &[Earthquake]) -> PointLayers {
    let markers: Vec<CircleMarker> = quakes.iter().map(circle_marker).collect();
    PointLayers {
        cluster: MarkerLayer {
            markers: markers.clone(),
        },
        circles: MarkerLayer { markers },
    }
}

/// Boundary geometry with fixed styling; no popups, no encodings.
pub fn build_boundary_layer(geometry: serde_json::Value) -> BoundaryLayer {
    BoundaryLayer {
        geometry,
        color: BOUNDARY_COLOR.to_string(),
        weight: BOUNDARY_WEIGHT,
    }
}

fn circle_marker(quake: &Earthquake) -> CircleMarker {
    let depth = quake.depth_km.unwrap_or(f64::NAN);
    CircleMarker {
        lat: quake.latitude,
        lng: quake.longitude,
        radius: radius_for(quake.magnitude),
        fill_color: color_for(depth).to_string(),
        popup: popup_html(quake),
    }
}

fn popup_html(quake: &Earthquake) -> String {
    let depth_text = match quake.depth_km {
        Some(depth) => format!("{} km", depth),
        None => "unknown".to_string(),
    };

    let mut html = format!(
        "<h3>{}</h3><hr><p>Magnitude: {}</p><p>Depth: {}</p>",
        escape_html(&quake.place),
        quake.magnitude,
        depth_text
    );
    if let Some(time) = quake.time {
        html.push_str(&format!(
            "<p>Time: {} UTC</p>",
            time.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
