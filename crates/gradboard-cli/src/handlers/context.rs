use anyhow::Result;
use serde::Serialize;

use crate::args::OutputFormat;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer};

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
}

impl HandlerContext {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        ConsoleRenderer::new(self.format).render(view_model)
    }

    pub fn render_to_string<T>(&self, view_model: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        ConsoleRenderer::new(self.format).render_to_string(view_model)
    }
}
