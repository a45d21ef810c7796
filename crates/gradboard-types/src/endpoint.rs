/// REST endpoints consumed by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SchoolsList,
    Announcements,
    ExamTypeRatio,
    /// Any path; used for configured chart sources such as `/api/national-lines/*`
    Custom(String),
}

impl Endpoint {
    pub const SCHOOLS_LIST: &'static str = "/api/schools/list";
    pub const ANNOUNCEMENTS: &'static str = "/api/announcements";
    pub const EXAM_TYPE_RATIO: &'static str = "/api/stats/exam-type-ratio";

    pub fn path(&self) -> &str {
        match self {
            Endpoint::SchoolsList => Self::SCHOOLS_LIST,
            Endpoint::Announcements => Self::ANNOUNCEMENTS,
            Endpoint::ExamTypeRatio => Self::EXAM_TYPE_RATIO,
            Endpoint::Custom(path) => path,
        }
    }
}

impl From<&str> for Endpoint {
    fn from(path: &str) -> Self {
        match path {
            Self::SCHOOLS_LIST => Endpoint::SchoolsList,
            Self::ANNOUNCEMENTS => Endpoint::Announcements,
            Self::EXAM_TYPE_RATIO => Endpoint::ExamTypeRatio,
            other => Endpoint::Custom(other.to_string()),
        }
    }
}
