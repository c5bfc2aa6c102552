use anyhow::Result;
use dashboard_service::{
    config::AppConfig,
    observability,
    sources::load_snapshot,
    views::{Dashboard, FIGURE_IDS, PANEL_IDS},
};

/// Print every KPI panel and a one-line status per figure, without serving.
fn main() -> Result<()> {
    observability::init_tracing();

    let cfg = AppConfig::load()?;
    let timeline = cfg.incident.timeline()?;
    let snapshot = load_snapshot(&cfg.data, &timeline.window);
    if snapshot.is_unusable() {
        anyhow::bail!("no input data available");
    }

    let dashboard = Dashboard::new(snapshot, timeline);

    println!("Incident of {} ({} to {})", cfg.incident.date, timeline.window.start, timeline.window.end);
    for id in PANEL_IDS {
        if let Some(panel) = dashboard.panel(id) {
            println!("\n[{id}]\n{}", panel.to_text());
        }
    }

    println!();
    for id in FIGURE_IDS {
        let Some(figure) = dashboard.figure(id) else {
            continue;
        };
        if figure.is_placeholder() {
            println!("{id}: placeholder ({})", figure.title());
        } else {
            println!("{id}: {} series", figure.trace_count());
        }
    }

    Ok(())
}
