use gradboard_engine::{ColumnResizer, ColumnSchema, PointerEvent, TablePage};
use ratatui::{
    Frame,
    crossterm::event::{
        KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::presentation::views::PX_PER_CELL;
use crate::presentation::views::tui::{PageButton, column_cells, pagination_line, school_table};

/// What the browser asks its owner to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    GoTo(usize),
    Reload,
    Quit,
}

/// Screen positions recorded by the last render
#[derive(Debug, Default)]
struct HitMap {
    header_row: Option<u16>,
    /// (column, x) of the cell just right of each column
    borders: Vec<(usize, u16)>,
    pagination_row: Option<u16>,
    pagination_x: u16,
    buttons: Vec<PageButton>,
}

/// Interactive school table: page navigation plus drag-to-resize headers.
///
/// Column widths live here, not in the dashboard state, so a reload keeps
/// whatever the user dragged them to.
pub struct SchoolBrowser {
    resizer: ColumnResizer,
    focused_column: usize,
    status: Option<String>,
    hits: HitMap,
}

impl SchoolBrowser {
    pub fn new(schema: &ColumnSchema) -> Self {
        Self {
            resizer: ColumnResizer::for_schema(schema),
            focused_column: 0,
            status: None,
            hits: HitMap::default(),
        }
    }

    pub fn widths(&self) -> &[u32] {
        self.resizer.widths()
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    pub fn handle_key(&mut self, key: KeyEvent, page: &TablePage) -> Option<BrowseAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let layout = page.pagination.as_ref();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(BrowseAction::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(BrowseAction::Quit)
            }
            KeyCode::Char('r') => Some(BrowseAction::Reload),
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => layout
                .filter(|l| !l.next.disabled)
                .map(|l| BrowseAction::GoTo(l.next.target)),
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => layout
                .filter(|l| !l.previous.disabled)
                .map(|l| BrowseAction::GoTo(l.previous.target)),
            KeyCode::Home => layout.map(|_| BrowseAction::GoTo(1)),
            KeyCode::End => layout.map(|l| BrowseAction::GoTo(l.total_pages)),
            KeyCode::Tab => {
                let count = self.resizer.widths().len().max(1);
                self.focused_column = (self.focused_column + 1) % count;
                None
            }
            KeyCode::Char('>') | KeyCode::Char('+') => {
                self.nudge(PX_PER_CELL as i32);
                None
            }
            KeyCode::Char('<') | KeyCode::Char('-') => {
                self.nudge(-(PX_PER_CELL as i32));
                None
            }
            KeyCode::Char('0') => {
                self.resizer.reset();
                None
            }
            _ => None,
        }
    }

    /// Keyboard resize runs through the same drag path as the mouse
    fn nudge(&mut self, delta: i32) {
        if self.resizer.is_resizing() {
            return;
        }
        let column = self.focused_column;
        self.resizer.handle(PointerEvent::Down { column, x: 0 });
        self.resizer.handle(PointerEvent::Move { x: delta });
        self.resizer.handle(PointerEvent::Up);
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<BrowseAction> {
        let x = i32::from(mouse.column) * PX_PER_CELL as i32;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(column) = self.border_at(mouse.column, mouse.row) {
                    self.focused_column = column;
                    self.resizer.handle(PointerEvent::Down { column, x });
                    return None;
                }
                self.button_at(mouse.column, mouse.row)
                    .map(BrowseAction::GoTo)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.resizer.handle(PointerEvent::Move { x });
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.resizer.handle(PointerEvent::Up);
                None
            }
            _ => None,
        }
    }

    fn border_at(&self, column: u16, row: u16) -> Option<usize> {
        if self.hits.header_row != Some(row) {
            return None;
        }
        self.hits
            .borders
            .iter()
            .find(|(_, x)| x.abs_diff(column) <= 1)
            .map(|(idx, _)| *idx)
    }

    fn button_at(&self, column: u16, row: u16) -> Option<usize> {
        if self.hits.pagination_row != Some(row) {
            return None;
        }
        let offset = column.checked_sub(self.hits.pagination_x)?;
        self.hits
            .buttons
            .iter()
            .find(|b| (b.start..b.end).contains(&offset))
            .map(|b| b.target)
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, page: &TablePage) {
        let [table_area, pager_area, status_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let active = self.resizer.active_column();
        f.render_widget(school_table(page, active), table_area);

        // Header sits just inside the top border
        let mut x = table_area.x.saturating_add(1);
        self.hits.header_row = Some(table_area.y.saturating_add(1));
        self.hits.borders = column_cells(page)
            .into_iter()
            .enumerate()
            .map(|(idx, width)| {
                let border = x.saturating_add(width);
                x = border.saturating_add(1);
                (idx, border)
            })
            .collect();

        match &page.pagination {
            Some(layout) => {
                let (line, buttons) = pagination_line(layout);
                f.render_widget(Paragraph::new(line), pager_area);
                self.hits.pagination_row = Some(pager_area.y);
                self.hits.pagination_x = pager_area.x;
                self.hits.buttons = buttons;
            }
            None => {
                self.hits.pagination_row = None;
                self.hits.buttons.clear();
            }
        }

        f.render_widget(Paragraph::new(self.status_line(page)), status_area);
    }

    fn status_line(&self, page: &TablePage) -> Line<'static> {
        if let Some(status) = &self.status {
            return Line::styled(status.clone(), Style::default().fg(Color::Red));
        }

        let resizing = self.resizer.active_column().and_then(|column| {
            let label = page.header.get(column)?.label.clone();
            let width = self.resizer.width(column)?;
            Some(format!("调整列宽 {}: {}px", label, width))
        });
        let text = resizing.unwrap_or_else(|| {
            let focused = page
                .header
                .get(self.focused_column)
                .map(|h| h.label.as_str())
                .unwrap_or("-");
            format!(
                "Page {}/{} · {} schools · ←/→ page · Home/End · drag header borders or Tab+</> ({}) · 0 reset widths · r reload · q quit",
                page.page,
                page.total_pages.max(1),
                page.total_count,
                focused
            )
        });
        Line::styled(text, Style::default().fg(Color::DarkGray))
    }
}
