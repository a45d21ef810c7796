use gradboard_engine::ChartOption;
use gradboard_types::ChartKind;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewFormat};

#[derive(Debug, Serialize)]
pub struct ChartViewModel {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub endpoint: String,
    pub option: ChartOption,
}

impl CreateView for ChartViewModel {
    fn create_view<'a>(&'a self, format: ViewFormat) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::chart::ChartView;
        Box::new(ChartView::new(&self.id, &self.option, format))
    }
}

#[derive(Debug, Serialize)]
pub struct ChartEntryViewModel {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub endpoint: String,
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct ChartListViewModel {
    pub charts: Vec<ChartEntryViewModel>,
}

impl CreateView for ChartListViewModel {
    fn create_view<'a>(&'a self, format: ViewFormat) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::chart::ChartListView;
        Box::new(ChartListView::new(self, format))
    }
}
