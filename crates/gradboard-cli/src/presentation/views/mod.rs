pub mod announcement;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod school;
pub mod tui;

pub use announcement::AnnouncementListView;
pub use chart::{ChartListView, ChartView};
pub use config::{ConfigInitView, ConfigView};
pub use dashboard::DashboardView;
pub use school::{PaginationView, SchoolTableView};

/// Text shown in the single row of an empty school table
pub const EMPTY_SCHOOLS_TEXT: &str = "没有更多院校数据";

/// Text of the placeholder entry when there are no announcements
pub const EMPTY_ANNOUNCEMENTS_TEXT: &str = "暂无公告";

/// Terminal columns per px of configured column width
pub const PX_PER_CELL: u32 = 8;

/// Column width in terminal cells for a px width
pub fn cells_for(px: u32) -> usize {
    (px / PX_PER_CELL).max(4) as usize
}
