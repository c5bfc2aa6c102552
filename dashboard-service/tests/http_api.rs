mod common;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use dashboard_service::{
    config::{DataConfig, IncidentConfig},
    server::router,
    sources::{load_snapshot, Snapshot},
    views::Dashboard,
};
use serde_json::Value;
use tower::ServiceExt;

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> Value {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "{uri}");
    serde_json::from_slice(&body).unwrap()
}

fn empty_app() -> Router {
    let timeline = IncidentConfig::default().timeline().unwrap();
    router(Arc::new(Dashboard::new(Snapshot::default(), timeline)))
}

#[tokio::test]
async fn unknown_views_are_not_found() {
    let (status, _) = get(empty_app(), "/api/figures/sankey").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(empty_app(), "/api/panels/incident-mix").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_data_renders_placeholders() {
    let figure = get_json(empty_app(), "/api/figures/ramps").await;
    assert_eq!(figure["data"], serde_json::json!([]));
    assert_eq!(figure["layout"]["title"]["text"], "Ramps: data unavailable");

    let panel = get_json(empty_app(), "/api/panels/incident-start").await;
    assert!(panel["message"].is_string());
}

#[tokio::test]
async fn figures_are_served_as_json() {
    let response = empty_app()
        .oneshot(Request::builder().uri("/api/figures/coverage").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
}

#[tokio::test]
async fn views_list_and_page() {
    let views = get_json(empty_app(), "/api/views").await;
    assert_eq!(views["figures"].as_array().unwrap().len(), 6);
    assert_eq!(views["panels"].as_array().unwrap().len(), 4);

    let (status, body) = get(empty_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    let page = String::from_utf8(body).unwrap();
    assert!(page.contains("Grid incident of 2025-04-28"));
    assert!(page.contains("figure-demand-exchange-price"));
}

#[tokio::test]
async fn figures_carry_plotly_fields() {
    let dir = tempfile::tempdir().unwrap();
    let data = DataConfig {
        incident_path: dir.path().join("incident.parquet"),
        hourly_path: dir.path().join("hourly.csv"),
    };
    common::write_incident_parquet(&data.incident_path);
    common::write_hourly_csv(&data.hourly_path);

    let timeline = IncidentConfig::default().timeline().unwrap();
    let app = router(Arc::new(Dashboard::new(load_snapshot(&data, &timeline.window), timeline)));

    let figure = get_json(app.clone(), "/api/figures/demand-exchange-price").await;
    let traces = figure["data"].as_array().unwrap();
    assert_eq!(traces.len(), 3);
    assert_eq!(traces[0]["type"], "scatter");
    assert_eq!(traces[0]["x"][0], "2025-04-28 00:00:00");
    assert_eq!(traces[1]["yaxis"], "y2");
    assert_eq!(figure["layout"]["yaxis2"]["overlaying"], "y");
    assert_eq!(figure["layout"]["shapes"][0]["x0"], "2025-04-28 12:30:00");

    let mix = get_json(app.clone(), "/api/figures/incident-mix").await;
    assert!(mix["data"].as_array().unwrap().iter().all(|t| t["stackgroup"] == "one"));

    let panel = get_json(app, "/api/panels/coverage").await;
    assert_eq!(panel["list"]["items"][0], "Renewable coverage: 80.0%");
}
