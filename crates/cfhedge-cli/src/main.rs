//! CFHedge CLI - cash-flow hedge accounting from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Inspect a curve
//! cfhedge curve show --file EUR.3M.20230331.csv
//!
//! # Value a swap
//! cfhedge swap --trade trade.toml --curve EUR.3M.20230331.csv
//!
//! # Roll the reserve forward
//! cfhedge hedge --trade trade.toml --market-data curves/ --observations fv.csv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::HedgeConfig;

fn init_logging(filter: &str, quiet: bool) {
    let filter = if quiet {
        tracing_subscriber::EnvFilter::new("warn")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = HedgeConfig::resolve_path(cli.config.as_deref())?;
    let config = HedgeConfig::load(&config_path)?;
    init_logging(&config.log_filter, cli.quiet);
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    let ctx = Context {
        format: cli.format.unwrap_or(config.default_format),
        quiet: cli.quiet,
        config,
    };

    match cli.command {
        Commands::Curve(args) => commands::curve::execute(args, &ctx)?,
        Commands::Interpolate(args) => commands::interpolate::execute(args, &ctx)?,
        Commands::Schedule(args) => commands::schedule::execute(args, &ctx)?,
        Commands::Swap(args) => commands::swap::execute(args, &ctx)?,
        Commands::Hedge(args) => commands::hedge::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, config_path, &ctx)?,
    }

    Ok(())
}
