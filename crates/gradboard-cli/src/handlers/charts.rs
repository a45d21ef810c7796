use anyhow::Result;
use gradboard_runtime::Config;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext, config: &Config) -> Result<()> {
    ctx.render(presenters::present_chart_list(config))
}
