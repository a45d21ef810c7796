// NOTE: gradboard layering
//
// types   - records and payload shapes as the API sends them
// engine  - pure view-model building (pagination, table rows, resizing, charts)
// runtime - config, HTTP client, concurrent section loading, page state
// cli     - argument parsing, presenters and the text / JSON / HTML / TUI views
//
// Everything below the CLI is free of I/O formatting. The same TablePage feeds
// the HTML markup, the plain-text table and the interactive browser.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat};
pub use commands::run;
