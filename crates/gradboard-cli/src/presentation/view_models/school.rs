use gradboard_engine::TablePage;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewFormat};

#[derive(Debug, Serialize)]
pub struct SchoolPageViewModel {
    pub table: TablePage,
}

impl CreateView for SchoolPageViewModel {
    fn create_view<'a>(&'a self, format: ViewFormat) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::school::SchoolTableView;
        Box::new(SchoolTableView::new(&self.table, format))
    }
}
