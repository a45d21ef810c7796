use std::fmt;

use crate::presentation::formatters::html::escape;
use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel, ViewFormat};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    format: ViewFormat,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, format: ViewFormat) -> Self {
        Self { data, format }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let body = toml::to_string_pretty(&self.data.config).map_err(|_| fmt::Error)?;
        let origin = if self.data.exists {
            self.data.path.clone()
        } else {
            format!("{} (not found, using defaults)", self.data.path)
        };

        match self.format {
            ViewFormat::Text => {
                writeln!(f, "# {}", origin)?;
                write!(f, "{}", body)
            }
            ViewFormat::Html => writeln!(
                f,
                "<pre><code># {}\n{}</code></pre>",
                escape(&origin),
                escape(&body)
            ),
        }
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
    format: ViewFormat,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel, format: ViewFormat) -> Self {
        Self { data, format }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.format {
            ViewFormat::Text => writeln!(f, "{}", self.data.path),
            ViewFormat::Html => writeln!(f, "<p><code>{}</code></p>", escape(&self.data.path)),
        }
    }
}
