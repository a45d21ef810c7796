use serde::Serialize;

/// One dashboard section: its data, its inline error, or nothing
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionViewModel<T> {
    Ready { data: T },
    Failed { label: String, message: String },
    Skipped,
}

impl<T> SectionViewModel<T> {
    /// Full inline error text, e.g. `加载公告失败: HTTP error! status: 500`
    pub fn error_text(&self) -> Option<String> {
        match self {
            SectionViewModel::Failed { label, message } => Some(format!("{}: {}", label, message)),
            _ => None,
        }
    }
}
