use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::{
    config::Timeline,
    kpi::Panel,
    views::{Dashboard, FIGURE_IDS, PANEL_IDS},
};

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Clone)]
struct AppState {
    dashboard: Arc<Dashboard>,
    page: Arc<str>,
}

#[derive(Serialize)]
struct ViewList {
    figures: &'static [&'static str],
    panels: &'static [&'static str],
}

/// Page with the incident date and window filled in.
fn render_page(timeline: &Timeline) -> String {
    INDEX_HTML
        .replace("{{INCIDENT_DATE}}", &timeline.pre_event.format("%Y-%m-%d").to_string())
        .replace("{{WINDOW_START}}", &timeline.window.start.format("%Y-%m-%d %H:%M").to_string())
        .replace("{{WINDOW_END}}", &timeline.window.end.format("%Y-%m-%d %H:%M").to_string())
}

pub fn router(dashboard: Arc<Dashboard>) -> Router {
    let page = render_page(dashboard.timeline()).into();
    Router::new()
        .route("/", get(index_handler))
        .route("/api/views", get(views_handler))
        .route("/api/figures/:id", get(figure_handler))
        .route("/api/panels/:id", get(panel_handler))
        .with_state(AppState { dashboard, page })
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

async fn views_handler() -> Json<ViewList> {
    Json(ViewList {
        figures: &FIGURE_IDS,
        panels: &PANEL_IDS,
    })
}

async fn figure_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.dashboard.figure(&id) {
        Some(figure) => ([(header::CONTENT_TYPE, "application/json")], figure.to_json()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn panel_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Panel>, StatusCode> {
    state.dashboard.panel(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Serve the dashboard until Ctrl-C.
pub async fn serve(bind_addr: &str, dashboard: Arc<Dashboard>) -> anyhow::Result<()> {
    let addr: SocketAddr = bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server bind address {bind_addr}: {e}"))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "dashboard listening");

    axum::serve(listener, router(dashboard).into_make_service())
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
        })
        .await?;

    tracing::info!("dashboard stopped");
    Ok(())
}
