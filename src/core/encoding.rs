//! Depth and magnitude visual encodings.
//!
//! One table owns every depth-derived visual: marker fill color, legend
//! swatch, and the human-readable depth label all read `DEPTH_BINS`, so they
//! cannot drift apart.

/// A half-open depth interval `(lower, upper]` mapped to a display color and
/// label. `upper` is `None` for the deepest bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBin {
    pub lower: f64,
    pub upper: Option<f64>,
    pub color: &'static str,
    pub label: &'static str,
}

/// Canonical depth bins, ascending. The first bin is the catch-all: anything
/// at or below its displayed lower bound (including missing depth, carried as
/// NaN) colors the same as the shallowest interval.
pub static DEPTH_BINS: [DepthBin; 6] = [
    DepthBin {
        lower: -10.0,
        upper: Some(10.0),
        color: "#1a9850",
        label: "Surface",
    },
    DepthBin {
        lower: 10.0,
        upper: Some(30.0),
        color: "#91cf60",
        label: "Very Shallow",
    },
    DepthBin {
        lower: 30.0,
        upper: Some(50.0),
        color: "#d9ef8b",
        label: "Shallow",
    },
    DepthBin {
        lower: 50.0,
        upper: Some(70.0),
        color: "#fee08b",
        label: "Moderately Deep",
    },
    DepthBin {
        lower: 70.0,
        upper: Some(90.0),
        color: "#fc8d59",
        label: "Deep",
    },
    DepthBin {
        lower: 90.0,
        upper: None,
        color: "#d73027",
        label: "Very Deep",
    },
];

/// Pixels of marker radius per unit of magnitude.
pub const RADIUS_SCALE: f64 = 4.0;

/// Marker radius for a magnitude. Negative magnitudes (they exist in the
/// feed) clamp to zero rather than producing a negative radius.
pub fn radius_for(magnitude: f64) -> f64 {
    (magnitude * RADIUS_SCALE).max(0.0)
}

/// Fill color for a depth in kilometers.
pub fn color_for(depth_km: f64) -> &'static str {
    bin_for(depth_km).color
}

/// Depth label for a depth in kilometers, from the same bin table as
/// [`color_for`].
pub fn explanation_for(depth_km: f64) -> &'static str {
    bin_for(depth_km).label
}

fn bin_for(depth_km: f64) -> &'static DepthBin {
    // Deepest threshold wins. NaN compares false against every bound and
    // falls through to the catch-all.
    DEPTH_BINS
        .iter()
        .rev()
        .find(|bin| depth_km > bin.lower)
        .unwrap_or(&DEPTH_BINS[0])
}
