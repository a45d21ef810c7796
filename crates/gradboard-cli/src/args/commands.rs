use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Load every section concurrently and render the whole dashboard")]
    Dashboard {
        #[arg(long, short, help = "Write the rendered dashboard to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    #[command(about = "Show one page of the school table")]
    Schools {
        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, value_parser = clap::value_parser!(u64).range(1..), help = "Override dashboard.page_size")]
        page_size: Option<u64>,
    },

    #[command(about = "Show the latest announcements")]
    Announcements,

    #[command(about = "Fetch one chart and print its option object")]
    Chart {
        #[arg(help = "Chart id as listed by `gradboard charts`")]
        id: String,
    },

    #[command(about = "List configured chart sections")]
    Charts,

    #[command(about = "Interactive school browser with live pagination and column resizing")]
    Browse,

    #[command(about = "Inspect or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a config file with default values")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
