mod context;

pub mod announcements;
pub mod browse;
pub mod chart;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod schools;

pub use context::HandlerContext;
