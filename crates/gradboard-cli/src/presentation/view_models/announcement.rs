use gradboard_engine::AnnouncementList;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewFormat};

#[derive(Debug, Serialize)]
pub struct AnnouncementListViewModel {
    pub announcements: AnnouncementList,
}

impl CreateView for AnnouncementListViewModel {
    fn create_view<'a>(&'a self, format: ViewFormat) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::announcement::AnnouncementListView;
        Box::new(AnnouncementListView::new(&self.announcements, format))
    }
}
