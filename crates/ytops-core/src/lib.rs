//! Domain types, time windows, and KPI aggregation for channel upload analytics.
//!
//! Nothing in this crate performs I/O apart from [`load_app_config`], which
//! reads `.env` and the process environment.

pub mod app_config;
pub mod config;
pub mod kpi;
pub mod video;
pub mod window;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use kpi::{compute_kpis, filter_by_title, FormatSplit, KpiResult};
pub use video::{ChannelId, VideoRecord};
pub use window::{custom_window, month_window, today_window, TimeWindow};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("window start {start} is after end {end}")]
    Inverted { start: String, end: String },

    #[error("date {0} has no representable local midnight")]
    InvalidDate(String),
}
