use std::fmt;

use gradboard_engine::school_columns;

use super::announcement::AnnouncementListView;
use super::chart::ChartView;
use super::school::SchoolTableView;
use crate::presentation::formatters::html::escape;
use crate::presentation::formatters::text::dim;
use crate::presentation::view_models::{DashboardViewModel, SectionViewModel, ViewFormat};

const PAGE_TITLE: &str = "考研数据看板";
const SCHOOLS_HEADING: &str = "院校列表";
const ANNOUNCEMENTS_HEADING: &str = "最新公告";
const CHARTS_HEADING: &str = "国家线趋势";

pub struct DashboardView<'a> {
    data: &'a DashboardViewModel,
    format: ViewFormat,
}

impl<'a> DashboardView<'a> {
    pub fn new(data: &'a DashboardViewModel, format: ViewFormat) -> Self {
        Self { data, format }
    }

    fn render_text(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "== {} ==", SCHOOLS_HEADING)?;
        match &self.data.schools {
            SectionViewModel::Ready { data } => {
                write!(f, "{}", SchoolTableView::new(data, ViewFormat::Text))?
            }
            section => write_text_section(f, section)?,
        }

        writeln!(f)?;
        writeln!(f, "== {} ==", ANNOUNCEMENTS_HEADING)?;
        match &self.data.announcements {
            SectionViewModel::Ready { data } => {
                write!(f, "{}", AnnouncementListView::new(data, ViewFormat::Text))?
            }
            section => write_text_section(f, section)?,
        }

        for panel in &self.data.charts {
            if matches!(panel.section, SectionViewModel::Skipped) {
                continue;
            }
            writeln!(f)?;
            match &panel.section {
                SectionViewModel::Ready { data } => {
                    write!(f, "{}", ChartView::new(&panel.id, data, ViewFormat::Text))?
                }
                section => {
                    writeln!(f, "{}", panel.title)?;
                    write_text_section(f, section)?
                }
            }
        }
        Ok(())
    }

    fn render_html(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="zh-CN">"#)?;
        writeln!(f, "<head>")?;
        writeln!(f, r#"<meta charset="utf-8">"#)?;
        writeln!(f, "<title>{}</title>", PAGE_TITLE)?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, r#"<main class="container">"#)?;

        if !matches!(self.data.schools, SectionViewModel::Skipped) {
            writeln!(f, r#"<section id="schools">"#)?;
            writeln!(f, "<h2>{}</h2>", SCHOOLS_HEADING)?;
            self.write_schools_html(f)?;
            writeln!(f, "</section>")?;
        }

        if !matches!(self.data.announcements, SectionViewModel::Skipped) {
            writeln!(f, r#"<section id="announcements">"#)?;
            writeln!(f, "<h2>{}</h2>", ANNOUNCEMENTS_HEADING)?;
            writeln!(f, r#"<ul class="list-group list-group-flush">"#)?;
            match &self.data.announcements {
                SectionViewModel::Ready { data } => {
                    AnnouncementListView::new(data, ViewFormat::Html).write_items(f)?
                }
                section => {
                    if let Some(text) = section.error_text() {
                        writeln!(
                            f,
                            r#"<li class="list-group-item text-danger">{}</li>"#,
                            escape(&text)
                        )?;
                    }
                }
            }
            writeln!(f, "</ul>")?;
            writeln!(f, "</section>")?;
        }

        writeln!(f, r#"<section id="charts">"#)?;
        writeln!(f, "<h2>{}</h2>", CHARTS_HEADING)?;
        for panel in &self.data.charts {
            match &panel.section {
                SectionViewModel::Ready { data } => {
                    write!(f, "{}", ChartView::new(&panel.id, data, ViewFormat::Html))?
                }
                SectionViewModel::Failed { .. } => writeln!(
                    f,
                    r#"<div class="chart-container" id="chart-{}"><div class="alert alert-danger">{}</div></div>"#,
                    escape(&panel.id),
                    escape(&panel.section.error_text().unwrap_or_default())
                )?,
                SectionViewModel::Skipped => {}
            }
        }
        writeln!(f, "</section>")?;

        writeln!(f, "</main>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }

    fn write_schools_html(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.schools {
            SectionViewModel::Ready { data } => {
                write!(f, "{}", SchoolTableView::new(data, ViewFormat::Html))
            }
            section => {
                writeln!(f, r#"<table class="table table-hover table-sm">"#)?;
                writeln!(f, "<tbody>")?;
                writeln!(
                    f,
                    r#"<tr><td colspan="{}" class="text-center text-danger">{}</td></tr>"#,
                    school_columns().len(),
                    escape(&section.error_text().unwrap_or_default())
                )?;
                writeln!(f, "</tbody>")?;
                writeln!(f, "</table>")
            }
        }
    }
}

impl<'a> fmt::Display for DashboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.format {
            ViewFormat::Text => self.render_text(f),
            ViewFormat::Html => self.render_html(f),
        }
    }
}

fn write_text_section<T>(f: &mut fmt::Formatter, section: &SectionViewModel<T>) -> fmt::Result {
    match section.error_text() {
        Some(text) => writeln!(f, "❌ {}", text),
        None => writeln!(f, "{}", dim("(disabled)")),
    }
}
