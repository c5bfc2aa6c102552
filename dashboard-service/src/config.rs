use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use grid_series::IncidentWindow;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const CONFIG_ENV: &str = "DASHBOARD_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "dashboard-config.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8050".to_string(),
        }
    }
}

/// Locations of the two pre-aggregated tables (`.parquet` or `.csv`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub incident_path: PathBuf,
    pub hourly_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            incident_path: PathBuf::from("datos_esios/df_incidente_plot_final_combinado_csv_esios.parquet"),
            hourly_path: PathBuf::from("datos_esios/df_calc_horario_final.parquet"),
        }
    }
}

/// Incident date and the wall-clock times of day the views refer to.
///
/// Times use `HH:MM:SS`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IncidentConfig {
    pub date: NaiveDate,
    pub days_before: u64,
    pub days_after: u64,
    /// Reference time for the pre-event KPI panels.
    pub pre_event_at: NaiveTime,
    /// Marker on the demand / exchange / price chart.
    pub demand_drop_at: NaiveTime,
    /// Time at which the coverage peak is annotated.
    pub coverage_peak_at: NaiveTime,
}

impl Default for IncidentConfig {
    fn default() -> Self {
        Self {
            date: NaiveDate::from_ymd_opt(2025, 4, 28).unwrap_or_default(),
            days_before: 1,
            days_after: 0,
            pre_event_at: NaiveTime::from_hms_opt(8, 45, 0).unwrap_or_default(),
            demand_drop_at: NaiveTime::from_hms_opt(12, 30, 0).unwrap_or_default(),
            coverage_peak_at: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
        }
    }
}

impl IncidentConfig {
    pub fn window(&self) -> anyhow::Result<IncidentWindow> {
        IncidentWindow::around(self.date, self.days_before, self.days_after).ok_or_else(|| {
            anyhow::anyhow!(
                "incident window out of range: {} minus {} days to plus {} days",
                self.date,
                self.days_before,
                self.days_after
            )
        })
    }

    pub fn timeline(&self) -> anyhow::Result<Timeline> {
        Ok(Timeline {
            window: self.window()?,
            pre_event: self.date.and_time(self.pre_event_at),
            demand_drop: self.date.and_time(self.demand_drop_at),
            coverage_peak: self.date.and_time(self.coverage_peak_at),
        })
    }
}

/// Wall-clock reference points of the incident, shared by all views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub window: IncidentWindow,
    pub pre_event: NaiveDateTime,
    pub demand_drop: NaiveDateTime,
    pub coverage_peak: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub incident: IncidentConfig,
    pub metrics: Option<MetricsConfig>,
}

impl AppConfig {
    /// Load from `$DASHBOARD_CONFIG`, or `dashboard-config.toml` in the working directory.
    pub fn load() -> anyhow::Result<Self> {
        use std::env;

        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    /// A missing file yields the built-in defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let cfg: AppConfig = toml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))?;
        cfg.incident.window()?;
        Ok(cfg)
    }
}
