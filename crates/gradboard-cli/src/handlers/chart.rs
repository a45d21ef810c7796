use anyhow::{Result, anyhow, bail};
use gradboard_runtime::{Config, Dashboard};
use tokio::runtime::Runtime;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext, runtime: &Runtime, config: Config, id: &str) -> Result<()> {
    let Some(source) = config.chart(id).cloned() else {
        bail!("unknown chart `{}` (see `gradboard charts`)", id);
    };

    let dashboard = Dashboard::new(config)?;
    let option = runtime
        .block_on(dashboard.fetch_chart(id))
        .map_err(|e| anyhow!("{}: {}", source.failure_label(), e))?;

    ctx.render(presenters::present_chart(&source, option))
}
