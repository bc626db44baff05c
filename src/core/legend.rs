//! Depth legend: a static HTML fragment, one row per depth bin.

use crate::core::encoding::{color_for, explanation_for, DepthBin};

/// Render the legend fragment. Swatch and explanation are both sampled just
/// inside the bin's lower bound so they always name the same bin.
pub fn build_legend(bins: &[DepthBin]) -> String {
    let mut html = String::from("<h4>Earthquake Depth (km)</h4>\n");

    for bin in bins {
        let sample = bin.lower + 1.0;
        let range = match bin.upper {
            Some(upper) => format!("{}&ndash;{} km", format_bound(bin.lower), format_bound(upper)),
            None => format!("{}+ km", format_bound(bin.lower)),
        };
        html.push_str(&format!(
            "<div class=\"legend-row\"><i style=\"background:{}\"></i> {} <span>{}</span></div>\n",
            color_for(sample),
            range,
            explanation_for(sample)
        ));
    }

    html
}

fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
