use crate::core::encoding::DEPTH_BINS;
use crate::core::feed::{decode_earthquakes, validate_boundaries};
use crate::core::layers::{
    build_boundary_layer, build_heat_layer, build_point_layers, CIRCLES_LAYER, HEATMAP_LAYER,
    MARKERS_LAYER, PLATES_LAYER,
};
use crate::core::legend::build_legend;
use crate::core::render::render_map;
use crate::core::{ConfigProvider, FeedBundle, Layer, LayerSet, MapDocument, Pipeline, Storage};
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

const OUTPUT_FILE: &str = "map.html";

pub struct MapPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> MapPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

async fn fetch_json(client: &Client, url: &str, timeout: Duration) -> Result<serde_json::Value> {
    tracing::debug!("Requesting feed: {}", url);
    let response = client.get(url).timeout(timeout).send().await?;
    tracing::debug!("Feed response status: {}", response.status());
    let response = response.error_for_status()?;
    Ok(response.json().await?)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MapPipeline<S, C> {
    async fn extract(&self) -> Result<FeedBundle> {
        let timeout = self.config.request_timeout();

        // 兩個請求並行,單一匯合點
        let (quake_result, boundary_result) = tokio::join!(
            fetch_json(&self.client, self.config.earthquake_endpoint(), timeout),
            fetch_json(&self.client, self.config.boundary_endpoint(), timeout),
        );

        // No earthquakes means nothing to render, so this one is fatal.
        let (earthquakes, skipped_features) = decode_earthquakes(quake_result?)?;
        tracing::info!("Decoded {} earthquakes from the feed", earthquakes.len());

        let mut warnings = Vec::new();
        let boundaries = match boundary_result.and_then(|value| {
            validate_boundaries(&value)?;
            Ok(value)
        }) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Tectonic boundary feed unavailable: {}", e);
                warnings.push(
                    "Tectonic plate boundaries could not be loaded; that overlay is missing."
                        .to_string(),
                );
                None
            }
        };

        Ok(FeedBundle {
            earthquakes,
            skipped_features,
            boundaries,
            warnings,
        })
    }

    async fn transform(&self, feeds: FeedBundle) -> Result<MapDocument> {
        let mut layers = LayerSet::new();

        layers.insert(
            HEATMAP_LAYER,
            Layer::Heat(build_heat_layer(&feeds.earthquakes)),
        );

        let points = build_point_layers(&feeds.earthquakes);
        layers.insert(MARKERS_LAYER, Layer::Cluster(points.cluster));
        layers.insert(CIRCLES_LAYER, Layer::Circles(points.circles));

        if let Some(geometry) = feeds.boundaries {
            layers.insert(PLATES_LAYER, Layer::Boundary(build_boundary_layer(geometry)));
        }

        let mut warnings = feeds.warnings;
        if feeds.skipped_features > 0 {
            warnings.push(format!(
                "{} malformed feature(s) in the earthquake feed were skipped.",
                feeds.skipped_features
            ));
        }

        Ok(MapDocument {
            title: self.config.map_title().to_string(),
            center: self.config.map_center(),
            zoom: self.config.map_zoom(),
            layers,
            legend_html: build_legend(&DEPTH_BINS),
            warnings,
            skipped_features: feeds.skipped_features,
        })
    }

    async fn load(&self, document: MapDocument) -> Result<String> {
        let html = render_map(&document)?;
        tracing::debug!("Writing map page ({} bytes) to storage", html.len());
        self.storage
            .write_file(OUTPUT_FILE, html.as_bytes())
            .await?;

        Ok(format!("{}/{}", self.config.output_path(), OUTPUT_FILE))
    }
}
