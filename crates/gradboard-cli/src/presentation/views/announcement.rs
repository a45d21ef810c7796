use std::fmt;

use gradboard_engine::AnnouncementList;

use super::EMPTY_ANNOUNCEMENTS_TEXT;
use crate::presentation::formatters::html::escape;
use crate::presentation::formatters::text::dim;
use crate::presentation::view_models::ViewFormat;

pub struct AnnouncementListView<'a> {
    list: &'a AnnouncementList,
    format: ViewFormat,
}

impl<'a> AnnouncementListView<'a> {
    pub fn new(list: &'a AnnouncementList, format: ViewFormat) -> Self {
        Self { list, format }
    }

    fn render_text(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let AnnouncementList::Entries { entries } = self.list else {
            return writeln!(f, "{}", dim(EMPTY_ANNOUNCEMENTS_TEXT));
        };

        for entry in entries {
            match &entry.date {
                Some(date) => writeln!(f, "• {}  {}", entry.title, dim(date))?,
                None => writeln!(f, "• {}", entry.title)?,
            }
            if let Some(href) = &entry.href {
                writeln!(f, "  {}", dim(href))?;
            }
        }
        Ok(())
    }

    /// `<li>` entries only; the caller supplies the surrounding `<ul>`
    pub fn write_items(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let AnnouncementList::Entries { entries } = self.list else {
            return writeln!(
                f,
                r#"<li class="list-group-item text-muted">{}</li>"#,
                EMPTY_ANNOUNCEMENTS_TEXT
            );
        };

        for entry in entries {
            write!(f, r#"<li class="list-group-item">"#)?;
            match &entry.href {
                Some(href) => write!(
                    f,
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    escape(href),
                    escape(&entry.title)
                )?,
                None => write!(f, "{}", escape(&entry.title))?,
            }
            if let Some(date) = &entry.date {
                write!(f, r#" <small class="text-muted">{}</small>"#, escape(date))?;
            }
            writeln!(f, "</li>")?;
        }
        Ok(())
    }

    fn render_html(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, r#"<ul class="list-group list-group-flush">"#)?;
        self.write_items(f)?;
        writeln!(f, "</ul>")
    }
}

impl<'a> fmt::Display for AnnouncementListView<'a> {
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
    use gradboard_engine::{DEFAULT_DATE_FORMAT, build_announcement_list};
    use gradboard_types::Announcement;

    #[test]
    fn test_empty_list_shows_placeholder() {
        let list = build_announcement_list(&[], DEFAULT_DATE_FORMAT);
        assert_eq!(
            AnnouncementListView::new(&list, ViewFormat::Html).to_string(),
            "<ul class=\"list-group list-group-flush\">\n<li class=\"list-group-item text-muted\">暂无公告</li>\n</ul>\n"
        );
        assert_eq!(
            AnnouncementListView::new(&list, ViewFormat::Text).to_string(),
            "暂无公告\n"
        );
    }

    #[test]
    fn test_links_open_in_new_context() {
        let items = vec![
            Announcement::new("复试 & 调剂")
                .with_url("https://yz.example.edu/n?id=1&t=2")
                .with_timestamp("2025-03-14"),
            Announcement::new("无链接"),
        ];
        let list = build_announcement_list(&items, DEFAULT_DATE_FORMAT);
        let html = AnnouncementListView::new(&list, ViewFormat::Html).to_string();

        assert!(html.contains(
            r#"<a href="https://yz.example.edu/n?id=1&amp;t=2" target="_blank" rel="noopener noreferrer">复试 &amp; 调剂</a> <small class="text-muted">2025/3/14</small>"#
        ));
        assert!(html.contains(r#"<li class="list-group-item">无链接</li>"#));
    }
}
