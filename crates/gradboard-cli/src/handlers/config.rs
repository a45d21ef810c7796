use anyhow::{Result, bail};
use gradboard_runtime::Config;
use std::path::Path;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn show(ctx: &HandlerContext, config: Config, path: &Path) -> Result<()> {
    ctx.render(presenters::present_config(config, path))
}

pub fn init(ctx: &HandlerContext, path: &Path, force: bool) -> Result<()> {
    let exists = path.exists();
    if exists && !force {
        bail!(
            "{} already exists (pass --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    ctx.render(presenters::present_config_init(path, exists))
}
