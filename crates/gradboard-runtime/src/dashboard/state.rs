use gradboard_engine::{ColumnSchema, PageSize, TablePage, render_table_page, total_pages};
use gradboard_types::Record;

/// The fetched school collection and the page being shown.
///
/// Only a successful schools fetch replaces the collection. Page changes
/// re-slice what is already held and never touch the network.
#[derive(Debug, Clone)]
pub struct DashboardState {
    schools: Vec<Record>,
    current_page: usize,
    page_size: PageSize,
}

impl DashboardState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            schools: Vec::new(),
            current_page: 1,
            page_size,
        }
    }

    /// Swap in a fresh collection and go back to page 1
    pub fn replace_schools(&mut self, schools: Vec<Record>) {
        self.schools = schools;
        self.current_page = 1;
    }

    pub fn schools(&self) -> &[Record] {
        &self.schools
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.schools.len(), self.page_size)
    }

    /// Render any page without changing state. Out-of-range pages give the
    /// empty-state row.
    pub fn render_page(
        &self,
        page: usize,
        schema: &ColumnSchema,
        widths: Option<&[u32]>,
    ) -> TablePage {
        render_table_page(&self.schools, schema, self.page_size, page, widths)
    }

    pub fn render_current(&self, schema: &ColumnSchema, widths: Option<&[u32]>) -> TablePage {
        self.render_page(self.current_page, schema, widths)
    }

    /// Move to `page` if it exists. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to(self.current_page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to(self.total_pages())
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
