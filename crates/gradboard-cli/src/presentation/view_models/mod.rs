pub mod announcement;
pub mod chart;
pub mod common;
pub mod config;
pub mod dashboard;
pub mod result;
pub mod school;
pub mod section;

use std::fmt;

pub use announcement::AnnouncementListViewModel;
pub use chart::{ChartEntryViewModel, ChartListViewModel, ChartViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel, ViewFormat};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use dashboard::{ChartPanelViewModel, DashboardViewModel};
pub use result::CommandResultViewModel;
pub use school::SchoolPageViewModel;
pub use section::SectionViewModel;

/// Bridge from a view-model to the view that lays it out
pub trait CreateView {
    fn create_view<'a>(&'a self, format: ViewFormat) -> Box<dyn fmt::Display + 'a>;
}
