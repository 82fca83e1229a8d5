use anyhow::Result;
use clap::Parser;

use casetrail::cli::{self, Cli, Commands};
use casetrail::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(dir) = cli.dir {
        config.data_dir = dir;
    }

    dispatch(cli.command, &config).await
}

async fn dispatch(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::List => cli::list::run(config).await,
        Commands::Timeline {
            document,
            format,
            workers,
        } => cli::timeline::run(config, &document, format, workers).await,
        Commands::Stats { document } => cli::stats::run(config, &document).await,
        Commands::Names { document } => cli::names::run(config, &document).await,
        Commands::Export {
            document,
            format,
            out_dir,
        } => cli::export::run(config, &document, format.into(), out_dir.as_deref()).await,
    }
}
