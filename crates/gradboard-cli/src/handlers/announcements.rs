use anyhow::{Result, anyhow};
use gradboard_runtime::{ANNOUNCEMENTS_FAILURE, Config, Dashboard};
use tokio::runtime::Runtime;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext, runtime: &Runtime, config: Config) -> Result<()> {
    let dashboard = Dashboard::new(config)?;
    let announcements = runtime
        .block_on(dashboard.fetch_announcements())
        .map_err(|e| anyhow!("{}: {}", ANNOUNCEMENTS_FAILURE, e))?;

    ctx.render(presenters::present_announcements(announcements))
}
