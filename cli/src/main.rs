mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{handle_config, handle_embed, handle_models, load_config, Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let config = load_config(&cli.global)?;

    match cli.command.unwrap_or(Commands::Embed { texts: Vec::new() }) {
        Commands::Embed { texts } => {
            handle_embed(&config, texts).await?;
        }
        Commands::Models => {
            handle_models(&config).await?;
        }
        Commands::Config => {
            handle_config(&config)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only results. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
