mod controller;
mod section;
mod state;

pub use controller::{ANNOUNCEMENTS_FAILURE, Dashboard, DashboardSnapshot, SCHOOLS_FAILURE};
pub use section::{ChartSection, Section, SectionError};
pub use state::DashboardState;
