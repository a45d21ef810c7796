use gradboard_engine::{AnnouncementList, ChartOption, TablePage};
use gradboard_types::ChartKind;
use serde::Serialize;
use std::fmt;

use super::{CreateView, SectionViewModel, ViewFormat};

#[derive(Debug, Serialize)]
pub struct ChartPanelViewModel {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub section: SectionViewModel<ChartOption>,
}

#[derive(Debug, Serialize)]
pub struct DashboardViewModel {
    pub schools: SectionViewModel<TablePage>,
    pub announcements: SectionViewModel<AnnouncementList>,
    pub charts: Vec<ChartPanelViewModel>,
}

impl CreateView for DashboardViewModel {
    fn create_view<'a>(&'a self, format: ViewFormat) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::dashboard::DashboardView;
        Box::new(DashboardView::new(self, format))
    }
}
