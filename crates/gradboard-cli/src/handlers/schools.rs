use anyhow::{Result, anyhow};
use gradboard_runtime::{Config, Dashboard, SCHOOLS_FAILURE};
use tokio::runtime::Runtime;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext, runtime: &Runtime, config: Config, page: usize) -> Result<()> {
    let mut dashboard = Dashboard::new(config)?;
    runtime
        .block_on(dashboard.load_schools())
        .map_err(|e| anyhow!("{}: {}", SCHOOLS_FAILURE, e))?;

    // Out-of-range pages still render, as the empty-state row
    let table = dashboard
        .state()
        .render_page(page, dashboard.schema(), None);

    ctx.render(presenters::present_school_page(table))
}
