pub mod announcement;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod school;

pub use announcement::present_announcements;
pub use chart::{present_chart, present_chart_list};
pub use config::{present_config, present_config_init};
pub use dashboard::present_dashboard;
pub use school::present_school_page;
