use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: [&str; 2] = ["dashboard_service=info", "kpi_report=info"];

/// Install the fmt subscriber: `info` for the dashboard binaries plus any `RUST_LOG` directives.
pub fn init_tracing() {
    let filter = DEFAULT_DIRECTIVES
        .iter()
        .filter_map(|d| d.parse().ok())
        .fold(EnvFilter::from_default_env(), EnvFilter::add_directive);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
