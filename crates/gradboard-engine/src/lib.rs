// Engine module - pure view-model building (pagination, table rows, resizing, charts)
// This layer sits between API records (types) and the runtime/CLI presentation

pub mod announcement;
pub mod chart;
pub mod error;
pub mod pagination;
pub mod resize;
pub mod table;

pub use announcement::{
    AnnouncementEntry, AnnouncementList, DEFAULT_DATE_FORMAT, build_announcement_list,
    format_timestamp, format_timestamp_value,
};
pub use chart::{ChartOption, Series, build_chart, build_proportion_chart, build_trend_chart};
pub use error::{Error, Result};
pub use pagination::{
    MAX_PAGE_BUTTONS, PageControl, PageItem, PageLayout, PageSize, build_page_layout,
    page_range, slice_page, total_pages,
};
pub use resize::{ColumnResizer, MIN_COLUMN_WIDTH, PointerEvent, ResizeState};
pub use table::{
    Align, BadgeRule, CellFormat, CellModel, ColumnSchema, ColumnSpec, HeaderCell, RowModel,
    TableBody, Tone, build_header, build_table_body, school_columns,
};

use gradboard_types::Record;
use serde::Serialize;

// Façade API - the view of one page that runtime and CLI consume

/// Everything needed to draw one page of a paginated table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablePage {
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub header: Vec<HeaderCell>,
    pub body: TableBody,
    /// Absent when everything fits on one page
    pub pagination: Option<PageLayout>,
}

/// Slice `records` to `page` and build rows plus pagination controls.
/// Out-of-range pages render the empty-state row.
pub fn render_table_page(
    records: &[Record],
    schema: &ColumnSchema,
    page_size: PageSize,
    page: usize,
    widths: Option<&[u32]>,
) -> TablePage {
    let total = total_pages(records.len(), page_size);
    TablePage {
        page,
        page_size: page_size.get(),
        total_count: records.len(),
        total_pages: total,
        header: build_header(schema, widths),
        body: build_table_body(slice_page(records, page_size, page), schema),
        pagination: build_page_layout(page, total),
    }
}
