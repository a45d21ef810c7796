use gradboard_engine::{Align, PageItem, PageLayout, TableBody, TablePage, Tone};
use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::presentation::views::{EMPTY_SCHOOLS_TEXT, cells_for};

/// Clickable pagination button, in columns relative to the line start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub start: u16,
    pub end: u16,
    pub target: usize,
}

/// Terminal widths for each header cell
pub fn column_cells(page: &TablePage) -> Vec<u16> {
    page.header
        .iter()
        .map(|cell| cells_for(cell.width).min(u16::MAX as usize) as u16)
        .collect()
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Primary => Color::Blue,
        Tone::Secondary => Color::Gray,
        Tone::Info => Color::Cyan,
        Tone::Warning => Color::Yellow,
        Tone::Danger => Color::Red,
    }
}

pub fn school_table<'a>(page: &'a TablePage, active_column: Option<usize>) -> Table<'a> {
    let header = Row::new(page.header.iter().enumerate().map(|(idx, cell)| {
        let style = if Some(idx) == active_column {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        Cell::from(cell.label.as_str()).style(style)
    }))
    .style(Style::default().fg(Color::White));

    let rows: Vec<Row> = match &page.body {
        TableBody::Rows { rows } => rows
            .iter()
            .map(|row| {
                Row::new(row.cells.iter().map(|cell| {
                    let mut style = Style::default();
                    if cell.is_placeholder {
                        style = style.fg(Color::DarkGray);
                    } else if let Some(tone) = cell.tone {
                        style = style.fg(tone_color(tone));
                    } else if cell.href.is_some() {
                        style = style.add_modifier(Modifier::UNDERLINED);
                    }
                    let line = match cell.align {
                        Align::Center => Line::from(cell.text.as_str()).centered(),
                        Align::Left => Line::from(cell.text.as_str()),
                    };
                    Cell::from(line).style(style)
                }))
            })
            .collect(),
        TableBody::Empty { .. } => vec![Row::new(vec![
            Cell::from(EMPTY_SCHOOLS_TEXT).style(Style::default().fg(Color::DarkGray)),
        ])],
    };

    let widths: Vec<Constraint> = column_cells(page).into_iter().map(Constraint::Length).collect();

    Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" 院校列表 ({}) ", page.total_count)),
        )
}

/// Pagination as one line plus the hit box of every enabled button
pub fn pagination_line(layout: &PageLayout) -> (Line<'static>, Vec<PageButton>) {
    let mut spans = Vec::new();
    let mut buttons = Vec::new();
    let mut offset: u16 = 0;

    let mut push = |label: String, style: Style, target: Option<usize>| {
        let width = label.chars().count() as u16;
        if let Some(target) = target {
            buttons.push(PageButton {
                start: offset,
                end: offset + width,
                target,
            });
        }
        offset += width + 1;
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    };

    let disabled = Style::default().fg(Color::DarkGray);
    let normal = Style::default();

    push(
        " « ".to_string(),
        if layout.previous.disabled { disabled } else { normal },
        (!layout.previous.disabled).then_some(layout.previous.target),
    );

    for item in &layout.items {
        match item {
            PageItem::Page { number, active: true } => push(
                format!("[{}]", number),
                Style::default().fg(Color::Black).bg(Color::Cyan),
                None,
            ),
            PageItem::Page { number, active: false } => {
                push(format!(" {} ", number), normal, Some(*number))
            }
            PageItem::Ellipsis => push("...".to_string(), disabled, None),
        }
    }

    push(
        " » ".to_string(),
        if layout.next.disabled { disabled } else { normal },
        (!layout.next.disabled).then_some(layout.next.target),
    );

    (Line::from(spans), buttons)
}
