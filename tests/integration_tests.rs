use httpmock::prelude::*;
use quakemap::{CliConfig, LocalStorage, MapEngine, MapPipeline};
use tempfile::TempDir;

fn quake_feed() -> serde_json::Value {
    serde_json::json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"mag": 1.0, "place": "12km SSW of Searles Valley, CA", "time": 1700000000000i64},
                "geometry": {"type": "Point", "coordinates": [-117.4, 35.7, 5.0]}
            },
            {
                "type": "Feature",
                "properties": {"mag": 5.0, "place": "Off the east coast of Honshu, Japan", "time": 1700000100000i64},
                "geometry": {"type": "Point", "coordinates": [142.3, 38.1, 45.0]}
            },
            {
                "type": "Feature",
                "properties": {"mag": 9.5, "place": "Offshore Bio-Bio, Chile", "time": 1700000200000i64},
                "geometry": {"type": "Point", "coordinates": [-73.0, -36.6, 95.0]}
            }
        ]
    })
}

fn boundary_feed() -> serde_json::Value {
    serde_json::json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"Name": "PA-NZ"},
            "geometry": {
                "type": "LineString",
                "coordinates": [[-75.0, -40.0], [-70.0, -30.0]]
            }
        }]
    })
}

fn config_for(server: &MockServer, output_path: &str) -> CliConfig {
    CliConfig {
        earthquake_endpoint: server.url("/quakes.geojson"),
        boundary_endpoint: server.url("/plates.geojson"),
        output_path: output_path.to_string(),
        map_title: "Earthquake Map".to_string(),
        center_lat: 0.0,
        center_lng: 0.0,
        map_zoom: 2,
        timeout_seconds: 5,
        config: None,
        verbose: false,
        log_json: false,
        monitor: false,
    }
}

#[tokio::test]
async fn test_end_to_end_map_build_with_real_http() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let quake_mock = server.mock(|when, then| {
        when.method(GET).path("/quakes.geojson");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(quake_feed());
    });
    let plates_mock = server.mock(|when, then| {
        when.method(GET).path("/plates.geojson");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(boundary_feed());
    });

    let config = config_for(&server, &output_path);
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = MapPipeline::new(storage, config);
    let engine = MapEngine::new_with_monitoring(pipeline, false);

    let result = engine.run().await;
    assert!(result.is_ok());
    quake_mock.assert();
    plates_mock.assert();

    let output_file_path = result.unwrap();
    assert!(output_file_path.ends_with("map.html"));

    let full_path = std::path::Path::new(&output_path).join("map.html");
    assert!(full_path.exists());

    let page = std::fs::read_to_string(&full_path).unwrap();

    // All four overlays are registered, in order
    let heat_pos = page.find("\"name\":\"Heatmap\"").unwrap();
    let markers_pos = page.find("\"name\":\"Markers\"").unwrap();
    let circles_pos = page.find("\"name\":\"Circles\"").unwrap();
    let plates_pos = page.find("\"name\":\"Tectonic Plates\"").unwrap();
    assert!(heat_pos < markers_pos && markers_pos < circles_pos && circles_pos < plates_pos);

    // Markers carry the encoded radii and colors
    assert!(page.contains("\"radius\":4.0"));
    assert!(page.contains("\"radius\":20.0"));
    assert!(page.contains("\"radius\":38.0"));
    assert!(page.contains("\"fillColor\":\"#1a9850\""));
    assert!(page.contains("\"fillColor\":\"#d9ef8b\""));
    assert!(page.contains("\"fillColor\":\"#d73027\""));

    // Popups contain the place labels
    assert!(page.contains("Searles Valley"));
    assert!(page.contains("Honshu"));
    assert!(page.contains("Bio-Bio"));

    // Legend has exactly one row per depth bin
    assert_eq!(page.matches("legend-row").count(), 6);

    // Clean run renders no warning banner
    assert!(!page.contains("class=\"warning-banner\""));
}

#[tokio::test]
async fn test_zero_feature_feed_still_produces_a_page() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/quakes.geojson");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"type": "FeatureCollection", "features": []}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/plates.geojson");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(boundary_feed());
    });

    let config = config_for(&server, &output_path);
    let storage = LocalStorage::new(output_path.clone());
    let engine = MapEngine::new(MapPipeline::new(storage, config));

    engine.run().await.unwrap();

    let page = std::fs::read_to_string(temp_dir.path().join("map.html")).unwrap();
    assert!(page.contains("\"name\":\"Heatmap\""));
    assert!(page.contains("\"points\":[]"));
    assert_eq!(page.matches("legend-row").count(), 6);
}

#[tokio::test]
async fn test_earthquake_feed_failure_fails_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/quakes.geojson");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path("/plates.geojson");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(boundary_feed());
    });

    let config = config_for(&server, &output_path);
    let storage = LocalStorage::new(output_path.clone());
    let engine = MapEngine::new(MapPipeline::new(storage, config));

    assert!(engine.run().await.is_err());
    assert!(!temp_dir.path().join("map.html").exists());
}

#[tokio::test]
async fn test_malformed_features_are_skipped_and_reported() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/quakes.geojson");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": {"mag": null, "place": "No magnitude"},
                        "geometry": {"type": "Point", "coordinates": [10.0, 10.0, 10.0]}
                    },
                    {
                        "type": "Feature",
                        "properties": {"mag": 3.0, "place": "Valid quake"},
                        "geometry": {"type": "Point", "coordinates": [10.0, 10.0, 10.0]}
                    }
                ]
            }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/plates.geojson");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(boundary_feed());
    });

    let config = config_for(&server, &output_path);
    let storage = LocalStorage::new(output_path.clone());
    let engine = MapEngine::new(MapPipeline::new(storage, config));

    engine.run().await.unwrap();

    let page = std::fs::read_to_string(temp_dir.path().join("map.html")).unwrap();
    assert!(page.contains("Valid quake"));
    assert!(!page.contains("No magnitude"));
    assert!(page.contains("class=\"warning-banner\""));
    assert!(page.contains("1 malformed feature(s)"));
}
