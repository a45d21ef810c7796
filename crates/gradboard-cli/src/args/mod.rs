mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "gradboard")]
#[command(about = "Browse graduate-admissions statistics: schools, announcements and national lines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $GRADBOARD_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Override `server.base_url` from the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
