// Runtime layer - configuration, HTTP client and the dashboard controller
// Sections load concurrently; page state lives in DashboardState

pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;

pub use client::ApiClient;
pub use config::{ChartSource, Config, DashboardConfig, ServerConfig, resolve_config_path};
pub use dashboard::{
    ANNOUNCEMENTS_FAILURE, ChartSection, Dashboard, DashboardSnapshot, DashboardState,
    SCHOOLS_FAILURE, Section, SectionError,
};
pub use error::{Error, Result};
