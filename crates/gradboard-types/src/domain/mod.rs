mod announcement;
mod chart;
mod record;

pub use announcement::Announcement;
pub use chart::{AxisBounds, ChartKind, ProportionSlice, SeriesPayload};
pub use record::{Record, parse_collection};
