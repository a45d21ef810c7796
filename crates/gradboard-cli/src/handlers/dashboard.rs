use anyhow::{Context, Result};
use gradboard_runtime::{Config, Dashboard};
use std::path::Path;
use tokio::runtime::Runtime;
use tracing::info;

use super::HandlerContext;
use crate::presentation::presenters;

/// Section failures are part of the output, not a command failure
pub fn handle(
    ctx: &HandlerContext,
    runtime: &Runtime,
    config: Config,
    output: Option<&Path>,
) -> Result<()> {
    let mut dashboard = Dashboard::new(config)?;
    let snapshot = runtime.block_on(dashboard.load());
    let view_model = presenters::present_dashboard(snapshot);

    let Some(path) = output else {
        return ctx.render(view_model);
    };

    let rendered = ctx.render_to_string(&view_model)?;
    std::fs::write(path, rendered)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "dashboard written");
    println!("Wrote dashboard to {}", path.display());
    Ok(())
}
