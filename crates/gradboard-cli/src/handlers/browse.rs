use anyhow::{Result, anyhow, bail};
use gradboard_runtime::{Config, Dashboard, SCHOOLS_FAILURE};
use is_terminal::IsTerminal;
use tokio::runtime::Runtime;

use crate::presentation::BrowseRenderer;

pub fn handle(runtime: &Runtime, config: Config) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `gradboard schools --page N` instead");
    }

    let mut dashboard = Dashboard::new(config)?;
    runtime
        .block_on(dashboard.load_schools())
        .map_err(|e| anyhow!("{}: {}", SCHOOLS_FAILURE, e))?;

    BrowseRenderer::new(&mut dashboard, runtime).run()
}
