//! Final page rendering: `MapDocument` through the bundled Handlebars
//! template into one self-contained HTML file.

use crate::domain::model::MapDocument;
use crate::utils::error::Result;
use handlebars::{handlebars_helper, Handlebars};
use serde_json::{json, Value};

const MAP_TEMPLATE: &str = include_str!("../assets/map.hbs");

pub fn get_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();

    handlebars_helper!(exists: |v: Value| !v.is_null());
    handlebars.register_helper("exists", Box::new(exists));

    handlebars
}

pub fn render_map(document: &MapDocument) -> Result<String> {
    let handlebars = get_handlebars();

    let overlays: Vec<Value> = document
        .layers
        .iter()
        .map(|(name, layer)| json!({"name": name, "layer": layer}))
        .collect();

    let html = handlebars.render_template(
        MAP_TEMPLATE,
        &json!({
            "title": document.title,
            "center_lat": document.center.0,
            "center_lng": document.center.1,
            "zoom": document.zoom,
            "overlays_json": serde_json::to_string(&overlays)?,
            "legend_html": document.legend_html,
            "warnings": document.warnings,
            "has_warnings": !document.warnings.is_empty(),
        }),
    )?;

    Ok(html)
}
