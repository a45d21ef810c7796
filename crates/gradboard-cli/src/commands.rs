use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use super::logging;
use anyhow::{Context, Result};
use gradboard_runtime::{Config, resolve_config_path};
use std::path::Path;
use tokio::runtime::Runtime;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    debug!(path = %config_path.display(), "config path resolved");
    let ctx = HandlerContext::new(cli.format);
    let base_url = cli.base_url.as_deref();

    match cli.command {
        // Never reads the existing file, so a broken one can be replaced
        Commands::Config {
            command: ConfigCommand::Init { force },
        } => handlers::config::init(&ctx, &config_path, force),

        Commands::Config {
            command: ConfigCommand::Show,
        } => {
            let config = load_config(&config_path, base_url)?;
            handlers::config::show(&ctx, config, &config_path)
        }

        Commands::Charts => {
            let config = load_config(&config_path, base_url)?;
            handlers::charts::handle(&ctx, &config)
        }

        Commands::Dashboard { output } => {
            let config = load_config(&config_path, base_url)?;
            let runtime = build_runtime()?;
            handlers::dashboard::handle(&ctx, &runtime, config, output.as_deref())
        }

        Commands::Schools { page, page_size } => {
            let mut config = load_config(&config_path, base_url)?;
            if let Some(size) = page_size {
                config.dashboard.page_size = size as usize;
            }
            let runtime = build_runtime()?;
            handlers::schools::handle(&ctx, &runtime, config, page)
        }

        Commands::Announcements => {
            let config = load_config(&config_path, base_url)?;
            let runtime = build_runtime()?;
            handlers::announcements::handle(&ctx, &runtime, config)
        }

        Commands::Chart { id } => {
            let config = load_config(&config_path, base_url)?;
            let runtime = build_runtime()?;
            handlers::chart::handle(&ctx, &runtime, config, &id)
        }

        Commands::Browse => {
            let config = load_config(&config_path, base_url)?;
            let runtime = build_runtime()?;
            handlers::browse::handle(&runtime, config)
        }
    }
}

fn load_config(path: &Path, base_url: Option<&str>) -> Result<Config> {
    let config = Config::load_from(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    Ok(match base_url {
        Some(url) => config.with_base_url(url),
        None => config,
    })
}

fn build_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
}
