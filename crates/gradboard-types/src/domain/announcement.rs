use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A site announcement as returned by `/api/announcements`.
///
/// `timestamp` stays raw: the server sends date strings or epoch
/// milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Announcement {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: None,
            timestamp: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<Value>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Link target, ignoring empty strings
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    /// Raw timestamp, ignoring `null` and empty strings
    pub fn timestamp(&self) -> Option<&Value> {
        self.timestamp.as_ref().filter(|t| match t {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        })
    }
}
