use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use gradboard_types::Announcement;
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_DATE_FORMAT: &str = "%Y/%-m/%-d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnouncementEntry {
    pub title: String,
    /// Present when the title links out; such links open a new browsing context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AnnouncementList {
    Entries { entries: Vec<AnnouncementEntry> },
    /// Single "no announcements" placeholder entry
    Empty,
}

impl AnnouncementList {
    pub fn len(&self) -> usize {
        match self {
            AnnouncementList::Entries { entries } => entries.len(),
            AnnouncementList::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn build_announcement_list(items: &[Announcement], date_format: &str) -> AnnouncementList {
    if items.is_empty() {
        return AnnouncementList::Empty;
    }

    let entries = items
        .iter()
        .map(|item| AnnouncementEntry {
            title: item.title.clone(),
            href: item.link().map(str::to_string),
            date: item.timestamp().map(|ts| format_timestamp_value(ts, date_format)),
        })
        .collect();

    AnnouncementList::Entries { entries }
}

fn effective_format(date_format: &str) -> &str {
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        DEFAULT_DATE_FORMAT
    } else {
        date_format
    }
}

/// Render a raw timestamp value. Numbers are epoch milliseconds, shown as
/// the UTC date; strings go through [`format_timestamp`].
pub fn format_timestamp_value(raw: &Value, date_format: &str) -> String {
    match raw {
        Value::String(s) => format_timestamp(s, date_format),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.date_naive().format(effective_format(date_format)).to_string())
            .unwrap_or_else(|| n.to_string()),
        other => other.to_string(),
    }
}

/// Render a timestamp as a date. RFC 3339 values keep their own offset;
/// anything unparseable is shown as-is.
pub fn format_timestamp(raw: &str, date_format: &str) -> String {
    let fmt = effective_format(date_format);

    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format(fmt).to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.date().format(fmt).to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(fmt).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_placeholder() {
        let list = build_announcement_list(&[], DEFAULT_DATE_FORMAT);
        assert_eq!(list, AnnouncementList::Empty);
        assert!(list.is_empty());
    }

    #[test]
    fn test_entries_keep_order_links_and_dates() {
        let items = vec![
            Announcement::new("复试名单公布")
                .with_url("https://yz.example.edu/notice/1")
                .with_timestamp("2025-03-14T09:30:00+08:00"),
            Announcement::new("调剂系统开放"),
        ];

        let AnnouncementList::Entries { entries } =
            build_announcement_list(&items, DEFAULT_DATE_FORMAT)
        else {
            panic!("expected entries");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "复试名单公布");
        assert_eq!(entries[0].href.as_deref(), Some("https://yz.example.edu/notice/1"));
        assert_eq!(entries[0].date.as_deref(), Some("2025/3/14"));
        assert_eq!(entries[1].href, None);
        assert_eq!(entries[1].date, None);
    }

    #[test]
    fn test_format_timestamp_variants() {
        assert_eq!(format_timestamp("2024-12-01 10:00:00", "%Y-%m-%d"), "2024-12-01");
        assert_eq!(format_timestamp("2024-12-01", DEFAULT_DATE_FORMAT), "2024/12/1");
        assert_eq!(format_timestamp("昨天", DEFAULT_DATE_FORMAT), "昨天");
    }

    #[test]
    fn test_epoch_millis_and_null_titles_still_render() {
        let items: Vec<Announcement> = serde_json::from_str(
            r#"[{"title":null,"url":"https://a"},{"title":"b","timestamp":1710400000000}]"#,
        )
        .unwrap();

        let AnnouncementList::Entries { entries } =
            build_announcement_list(&items, DEFAULT_DATE_FORMAT)
        else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].title, "");
        assert_eq!(entries[0].href.as_deref(), Some("https://a"));
        assert_eq!(entries[1].date.as_deref(), Some("2024/3/14"));
    }

    #[test]
    fn test_format_timestamp_value_variants() {
        let millis = Value::from(1710400000000i64);
        assert_eq!(format_timestamp_value(&millis, "%Y-%m-%d"), "2024-03-14");
        assert_eq!(
            format_timestamp_value(&Value::from("2024-12-01"), DEFAULT_DATE_FORMAT),
            "2024/12/1"
        );
        assert_eq!(format_timestamp_value(&Value::Bool(true), DEFAULT_DATE_FORMAT), "true");
    }

    #[test]
    fn test_invalid_format_falls_back_to_default() {
        assert_eq!(format_timestamp("2024-02-03", "%Q"), "2024/2/3");
    }
}
