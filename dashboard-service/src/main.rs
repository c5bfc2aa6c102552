use std::sync::Arc;

use anyhow::Result;
use dashboard_service::{
    config::AppConfig, metrics_server, observability, server, sources::load_snapshot, views::Dashboard,
};

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    let cfg = AppConfig::load()?;

    if let Some(metrics_cfg) = &cfg.metrics {
        metrics_server::init(&metrics_cfg.bind_addr)?;
    }

    let timeline = cfg.incident.timeline()?;
    tracing::info!(
        date = %cfg.incident.date,
        window_start = %timeline.window.start,
        window_end = %timeline.window.end,
        "incident configured"
    );

    let snapshot = load_snapshot(&cfg.data, &timeline.window);
    if snapshot.is_unusable() {
        tracing::error!(
            incident = %cfg.data.incident_path.display(),
            hourly = %cfg.data.hourly_path.display(),
            "no table could be loaded, not starting the dashboard"
        );
        anyhow::bail!("no input data available");
    }
    if snapshot.incident.is_empty() || snapshot.hourly.is_empty() {
        tracing::warn!(
            incident_rows = snapshot.incident.len(),
            hourly_rows = snapshot.hourly.len(),
            "one table is empty, its views will show placeholders"
        );
    }

    let dashboard = Arc::new(Dashboard::new(snapshot, timeline));
    server::serve(&cfg.server.bind_addr, dashboard).await
}
