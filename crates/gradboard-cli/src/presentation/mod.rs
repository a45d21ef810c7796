//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                 ==(Text)==> [ View ]
//!                                                                 ==(Html)==> [ View ]
//! ```
//!
//! The interactive browser keeps its UI state (column widths, drag, button
//! hit boxes) in `components/` and emits actions back to the handler, which
//! owns the page state.
//!
//! - `view_models/`: serializable data contracts; JSON output is always the full view-model
//! - `presenters/`: runtime results to view-models, including badges and tips
//! - `views/`: `fmt::Display` text and markup, plus ratatui widgets under `views/tui`
//! - `renderers/`: console and terminal drivers
//! - `formatters/`: escaping, width-aware padding and number formatting

pub mod components;
pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{BrowseRenderer, ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel, ViewFormat,
};
