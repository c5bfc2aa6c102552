pub mod catalog;
pub mod charts;
pub mod config;
pub mod figure;
pub mod kpi;
pub mod metrics_server;
pub mod observability;
pub mod server;
pub mod sources;
pub mod views;
