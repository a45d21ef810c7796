use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;

use super::traits::Renderer;
use crate::args::OutputFormat;
use crate::presentation::formatters::text::colors_enabled;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewFormat};

pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render to a string: the full view-model as JSON, bare markup for
    /// HTML, or badge + view + tips for text.
    pub fn render_to_string<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        let mut out = String::new();

        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            }
            OutputFormat::Html => {
                write!(out, "{}", result.content.create_view(ViewFormat::Html))?;
            }
            OutputFormat::Text => {
                let color = colors_enabled();

                if let Some(badge) = &result.badge {
                    if color {
                        writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
                    } else {
                        writeln!(out, "{} {}", badge.icon(), badge.label)?;
                    }
                    writeln!(out)?;
                }

                write!(out, "{}", result.content.create_view(ViewFormat::Text))?;

                if !result.suggestions.is_empty() {
                    if color {
                        writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
                    } else {
                        writeln!(out, "\n💡 Tips:")?;
                    }
                    for tip in &result.suggestions {
                        write!(out, "  • {}", tip.description)?;
                        if let Some(cmd) = &tip.command {
                            if color {
                                write!(out, ": {}", cmd.cyan())?;
                            } else {
                                write!(out, ": {}", cmd)?;
                            }
                        }
                        writeln!(out)?;
                    }
                }
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        print!("{}", self.render_to_string(&result)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{ConfigInitViewModel, Guidance, StatusBadge};

    fn sample() -> CommandResultViewModel<ConfigInitViewModel> {
        CommandResultViewModel::new(ConfigInitViewModel {
            path: "/tmp/gradboard.toml".to_string(),
            overwritten: false,
        })
        .with_badge(StatusBadge::success("Config written"))
        .with_suggestion(Guidance::new("Inspect it").with_command("gradboard config show"))
    }

    #[test]
    fn test_json_is_full_view_model() {
        let out = ConsoleRenderer::new(OutputFormat::Json)
            .render_to_string(&sample())
            .unwrap();
        insta::assert_snapshot!(out, @r###"
        {
          "badge": {
            "level": "success",
            "label": "Config written"
          },
          "content": {
            "path": "/tmp/gradboard.toml",
            "overwritten": false
          },
          "suggestions": [
            {
              "description": "Inspect it",
              "command": "gradboard config show"
            }
          ]
        }
        "###);
    }

    #[test]
    fn test_html_has_no_badge_or_tips() {
        let out = ConsoleRenderer::new(OutputFormat::Html)
            .render_to_string(&sample())
            .unwrap();
        assert_eq!(out, "<p><code>/tmp/gradboard.toml</code></p>\n");
    }

    #[test]
    fn test_text_has_badge_and_tips() {
        let out = ConsoleRenderer::new(OutputFormat::Text)
            .render_to_string(&sample())
            .unwrap();
        assert!(out.contains("Config written"));
        assert!(out.contains("/tmp/gradboard.toml\n"));
        assert!(out.contains("• Inspect it: gradboard config show"));
    }
}
