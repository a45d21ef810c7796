use crate::Error;
use crate::config::ChartSource;
use gradboard_engine::ChartOption;
use std::fmt;

/// Outcome of one independently loaded dashboard section
#[derive(Debug, Clone)]
pub enum Section<T> {
    Ready(T),
    Failed(SectionError),
    /// Disabled in config; nothing was fetched
    Skipped,
}

impl<T> Section<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Section::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SectionError> {
        match self {
            Section::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Section::Failed(_))
    }
}

/// Inline error shown in place of a section's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionError {
    pub label: String,
    pub message: String,
}

impl SectionError {
    pub fn new(label: impl Into<String>, err: &Error) -> Self {
        Self {
            label: label.into(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for SectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.message)
    }
}

#[derive(Debug, Clone)]
pub struct ChartSection {
    pub source: ChartSource,
    pub outcome: Section<ChartOption>,
}
