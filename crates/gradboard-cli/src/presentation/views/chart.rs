use std::fmt;

use gradboard_engine::ChartOption;
use gradboard_engine::chart::Series;

use crate::presentation::formatters::html::escape;
use crate::presentation::formatters::number::format_number;
use crate::presentation::formatters::text::{display_width, pad};
use crate::presentation::view_models::{ChartListViewModel, ViewFormat};

// --------------------------------------------------------
// Chart View
// --------------------------------------------------------

pub struct ChartView<'a> {
    id: &'a str,
    option: &'a ChartOption,
    format: ViewFormat,
}

impl<'a> ChartView<'a> {
    pub fn new(id: &'a str, option: &'a ChartOption, format: ViewFormat) -> Self {
        Self { id, option, format }
    }

    fn render_text(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} ({})", self.option.title.text, self.option.kind)?;

        let categories = self.option.categories();
        let label_width = self
            .option
            .series
            .iter()
            .map(|series| match series {
                Series::Cartesian(s) => display_width(&s.name),
                Series::Pie(p) => p.data.iter().map(|d| display_width(&d.name)).max().unwrap_or(0),
            })
            .max()
            .unwrap_or(0)
            .max(4);

        if !categories.is_empty() {
            let header: Vec<String> = categories.iter().map(|c| pad(c, 8)).collect();
            writeln!(f, "{} {}", pad("", label_width), header.join(" ").trim_end())?;
        }

        for series in &self.option.series {
            match series {
                Series::Cartesian(s) => {
                    let points: Vec<String> =
                        s.data.iter().map(|v| pad(&format_number(*v), 8)).collect();
                    writeln!(f, "{} {}", pad(&s.name, label_width), points.join(" ").trim_end())?;
                }
                Series::Pie(p) => {
                    let total: f64 = p.data.iter().map(|d| d.value).sum();
                    for slice in &p.data {
                        let share = if total > 0.0 {
                            slice.value / total * 100.0
                        } else {
                            0.0
                        };
                        writeln!(
                            f,
                            "{} {} ({:.1}%)",
                            pad(&slice.name, label_width),
                            format_number(Some(slice.value)),
                            share
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn render_html(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let option = serde_json::to_string(self.option).map_err(|_| fmt::Error)?;
        writeln!(
            f,
            r#"<div class="chart-container" id="chart-{}" data-chart-kind="{}" data-chart-option="{}"></div>"#,
            escape(self.id),
            self.option.kind,
            escape(&option)
        )
    }
}

impl<'a> fmt::Display for ChartView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.format {
            ViewFormat::Text => self.render_text(f),
            ViewFormat::Html => self.render_html(f),
        }
    }
}

// --------------------------------------------------------
// Chart List View
// --------------------------------------------------------

pub struct ChartListView<'a> {
    data: &'a ChartListViewModel,
    format: ViewFormat,
}

impl<'a> ChartListView<'a> {
    pub fn new(data: &'a ChartListViewModel, format: ViewFormat) -> Self {
        Self { data, format }
    }

    fn render_text(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.charts.is_empty() {
            return writeln!(f, "No charts configured.");
        }

        writeln!(f, "{:<18} {:<5} {:<8} {:<26} ENDPOINT", "ID", "KIND", "ENABLED", "TITLE")?;
        writeln!(f, "{}", "-".repeat(100))?;
        for chart in &self.data.charts {
            writeln!(
                f,
                "{:<18} {:<5} {:<8} {} {}",
                chart.id,
                chart.kind.as_str(),
                if chart.enabled { "yes" } else { "no" },
                pad(&chart.title, 26),
                chart.endpoint
            )?;
        }
        Ok(())
    }

    fn render_html(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, r#"<ul class="list-group">"#)?;
        for chart in &self.data.charts {
            writeln!(
                f,
                r#"<li class="list-group-item{}" data-chart-id="{}">{} <small class="text-muted">{}</small></li>"#,
                if chart.enabled { "" } else { " disabled" },
                escape(&chart.id),
                escape(&chart.title),
                escape(&chart.endpoint)
            )?;
        }
        writeln!(f, "</ul>")
    }
}

impl<'a> fmt::Display for ChartListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.format {
            ViewFormat::Text => self.render_text(f),
            ViewFormat::Html => self.render_html(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradboard_engine::build_chart;
    use gradboard_types::ChartKind;
    use serde_json::json;

    #[test]
    fn test_trend_text_lists_points_with_gaps() {
        let option = build_chart(
            &json!({ "years": ["2023", "2024"], "series": [{ "name": "A区", "data": [273, null] }] }),
            "总分",
            ChartKind::Line,
        )
        .unwrap();
        let text = ChartView::new("cs", &option, ViewFormat::Text).to_string();

        assert!(text.starts_with("总分 (line)\n"));
        assert!(text.contains("A区  273      -"));
    }

    #[test]
    fn test_pie_text_shows_shares() {
        let option = build_chart(
            &json!([{ "name": "自命题", "value": 3 }, { "name": "408", "value": 1 }]),
            "比例",
            ChartKind::Pie,
        )
        .unwrap();
        let text = ChartView::new("ratio", &option, ViewFormat::Text).to_string();

        assert!(text.contains("自命题 3 (75.0%)"));
        assert!(text.contains("408    1 (25.0%)"));
    }

    #[test]
    fn test_html_embeds_escaped_option() {
        let option = build_chart(
            &json!({ "years": ["2025"], "series": [{ "name": "\"q\"", "data": [1] }] }),
            "T",
            ChartKind::Bar,
        )
        .unwrap();
        let html = ChartView::new("t", &option, ViewFormat::Html).to_string();

        assert!(html.starts_with(r#"<div class="chart-container" id="chart-t" data-chart-kind="bar" data-chart-option="{&quot;title&quot;"#));
        assert!(!html.contains("\\\""));
    }
}
