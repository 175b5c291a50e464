//! vidguide - YouTube tutorials as step-by-step written guides
//!
//! Entry point for the vidguide CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vidguide::cli::{Cli, Commands};
use vidguide::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first so --verbose can pick the default filter
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            vidguide::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Generate { url, json } => {
                    vidguide::cli::commands::generate_guide(&settings, &url, json).await?;
                }
                Commands::Config(config_cmd) => {
                    vidguide::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
