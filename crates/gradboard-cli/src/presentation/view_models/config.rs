use gradboard_runtime::Config;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewFormat};

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub config: Config,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, format: ViewFormat) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigView;
        Box::new(ConfigView::new(self, format))
    }
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, format: ViewFormat) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigInitView;
        Box::new(ConfigInitView::new(self, format))
    }
}
