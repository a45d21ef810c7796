use std::fmt;

use gradboard_engine::{Align, CellModel, PageItem, PageLayout, TableBody, TablePage};

use super::{EMPTY_SCHOOLS_TEXT, cells_for};
use crate::presentation::formatters::html::escape;
use crate::presentation::formatters::text::{dim, display_width, pad, paint, truncate};
use crate::presentation::view_models::ViewFormat;

// --------------------------------------------------------
// School Table View
// --------------------------------------------------------

pub struct SchoolTableView<'a> {
    table: &'a TablePage,
    format: ViewFormat,
}

impl<'a> SchoolTableView<'a> {
    pub fn new(table: &'a TablePage, format: ViewFormat) -> Self {
        Self { table, format }
    }

    fn render_text(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let widths: Vec<usize> = self.table.header.iter().map(|h| cells_for(h.width)).collect();

        let header: Vec<String> = self
            .table
            .header
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad(&cell.label, *w))
            .collect();
        writeln!(f, "{}", header.join(" ").trim_end())?;
        let rule_width = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        writeln!(f, "{}", "-".repeat(rule_width))?;

        match &self.table.body {
            TableBody::Rows { rows } => {
                for row in rows {
                    let cells: Vec<String> = row
                        .cells
                        .iter()
                        .zip(&widths)
                        .map(|(cell, w)| text_cell(cell, *w))
                        .collect();
                    writeln!(f, "{}", cells.join(" ").trim_end())?;
                }
            }
            TableBody::Empty { .. } => writeln!(f, "{}", dim(EMPTY_SCHOOLS_TEXT))?,
        }

        writeln!(f)?;
        writeln!(
            f,
            "Page {}/{} · {} schools",
            self.table.page, self.table.total_pages, self.table.total_count
        )?;
        if let Some(layout) = &self.table.pagination {
            writeln!(f, "{}", PaginationView::new(layout, ViewFormat::Text))?;
        }
        Ok(())
    }

    fn render_html(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, r#"<table class="table table-hover table-sm">"#)?;
        writeln!(f, "<thead>")?;
        writeln!(f, "<tr>")?;
        for cell in &self.table.header {
            write!(
                f,
                r#"<th data-column="{}" style="width: {}px">{}"#,
                escape(&cell.key),
                cell.width,
                escape(&cell.label)
            )?;
            if cell.resizable {
                write!(f, r#"<div class="col-resizer"></div>"#)?;
            }
            writeln!(f, "</th>")?;
        }
        writeln!(f, "</tr>")?;
        writeln!(f, "</thead>")?;
        writeln!(f, "<tbody>")?;
        write_html_body(f, &self.table.body)?;
        writeln!(f, "</tbody>")?;
        writeln!(f, "</table>")?;

        if let Some(layout) = &self.table.pagination {
            write!(f, "{}", PaginationView::new(layout, ViewFormat::Html))?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for SchoolTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.format {
            ViewFormat::Text => self.render_text(f),
            ViewFormat::Html => self.render_html(f),
        }
    }
}

fn text_cell(cell: &CellModel, width: usize) -> String {
    let padded = match cell.align {
        Align::Left => pad(&cell.text, width),
        Align::Center => {
            let cut = truncate(&cell.text, width);
            let left = width.saturating_sub(display_width(&cut)) / 2;
            pad(&format!("{}{}", " ".repeat(left), cut), width)
        }
    };
    match (cell.tone, cell.is_placeholder) {
        (_, true) => dim(&padded),
        (Some(tone), false) => paint(&padded, tone),
        (None, false) => padded,
    }
}

/// `<tr>` rows for a table body
fn write_html_body(f: &mut fmt::Formatter, body: &TableBody) -> fmt::Result {
    match body {
        TableBody::Rows { rows } => {
            for row in rows {
                write!(f, "<tr>")?;
                for cell in &row.cells {
                    write_html_cell(f, cell)?;
                }
                writeln!(f, "</tr>")?;
            }
        }
        TableBody::Empty { colspan } => {
            writeln!(
                f,
                r#"<tr><td colspan="{}" class="text-center text-muted">{}</td></tr>"#,
                colspan, EMPTY_SCHOOLS_TEXT
            )?;
        }
    }
    Ok(())
}

fn write_html_cell(f: &mut fmt::Formatter, cell: &CellModel) -> fmt::Result {
    let class = match cell.align {
        Align::Center => r#" class="text-center""#,
        Align::Left => "",
    };
    write!(
        f,
        r#"<td{} style="min-width: {}px; white-space: nowrap;">"#,
        class, cell.min_width
    )?;

    let text = escape(&cell.text);
    match (&cell.href, cell.tone) {
        (Some(href), _) => write!(
            f,
            r#"<a href="{}" class="text-decoration-none">{}</a>"#,
            escape(href),
            text
        )?,
        (None, Some(tone)) => write!(
            f,
            r#"<span class="badge bg-{}">{}</span>"#,
            tone.as_str(),
            text
        )?,
        (None, None) => write!(f, "{}", text)?,
    }
    write!(f, "</td>")
}

// --------------------------------------------------------
// Pagination View
// --------------------------------------------------------

pub struct PaginationView<'a> {
    layout: &'a PageLayout,
    format: ViewFormat,
}

impl<'a> PaginationView<'a> {
    pub fn new(layout: &'a PageLayout, format: ViewFormat) -> Self {
        Self { layout, format }
    }

    fn render_text(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut parts = Vec::with_capacity(self.layout.items.len() + 2);

        let prev = if self.layout.previous.disabled {
            dim("«")
        } else {
            "«".to_string()
        };
        parts.push(prev);

        for item in &self.layout.items {
            parts.push(match item {
                PageItem::Page { number, active: true } => format!("[{}]", number),
                PageItem::Page { number, active: false } => number.to_string(),
                PageItem::Ellipsis => "...".to_string(),
            });
        }

        let next = if self.layout.next.disabled {
            dim("»")
        } else {
            "»".to_string()
        };
        parts.push(next);

        writeln!(f, "{}", parts.join(" "))
    }

    fn render_html(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, r#"<nav><ul class="pagination pagination-sm">"#)?;

        let prev = self.layout.previous;
        writeln!(
            f,
            r##"<li class="page-item{}"><a class="page-link" href="#" data-page="{}">&laquo;</a></li>"##,
            if prev.disabled { " disabled" } else { "" },
            prev.target
        )?;

        for item in &self.layout.items {
            match item {
                PageItem::Page { number, active } => writeln!(
                    f,
                    r##"<li class="page-item{}"><a class="page-link" href="#" data-page="{}">{}</a></li>"##,
                    if *active { " active" } else { "" },
                    number,
                    number
                )?,
                PageItem::Ellipsis => writeln!(
                    f,
                    r#"<li class="page-item disabled"><span class="page-link">...</span></li>"#
                )?,
            }
        }

        let next = self.layout.next;
        writeln!(
            f,
            r##"<li class="page-item{}"><a class="page-link" href="#" data-page="{}">&raquo;</a></li>"##,
            if next.disabled { " disabled" } else { "" },
            next.target
        )?;

        writeln!(f, "</ul></nav>")
    }
}

impl<'a> fmt::Display for PaginationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.format {
            ViewFormat::Text => self.render_text(f),
            ViewFormat::Html => self.render_html(f),
        }
    }
}
