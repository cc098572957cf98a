//! Config command implementation.
//!
//! Prints, locates or initialises the CLI configuration file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::config::HedgeConfig;
use crate::output::{print_header, print_info, print_output, print_success, print_warning, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write the default configuration file
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, path: PathBuf, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Path => execute_path(&path, ctx),
        ConfigCommand::Init(init_args) => execute_init(&init_args, &path),
    }
}

fn execute_show(ctx: &Context) -> Result<()> {
    let config = &ctx.config;
    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Minimal => {
            print!("{}", config.to_toml_string()?);
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let results = vec![
                KeyValue::new(
                    "market_data_dir",
                    config
                        .market_data_dir
                        .as_ref()
                        .map_or_else(String::new, |p| p.display().to_string()),
                ),
                KeyValue::new("default_interpolation", config.default_interpolation.clone()),
                KeyValue::new(
                    "default_format",
                    format!("{:?}", config.default_format).to_lowercase(),
                ),
                KeyValue::new("log_filter", config.log_filter.clone()),
                KeyValue::new("tolerance", config.tolerance.to_string()),
            ];
            print_header("Current Configuration", ctx.format);
            print_output(&results, ctx.format)?;
        }
    }
    Ok(())
}

fn execute_path(path: &std::path::Path, ctx: &Context) -> Result<()> {
    if ctx.format == OutputFormat::Minimal || ctx.quiet {
        println!("{}", path.display());
        return Ok(());
    }
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

fn execute_init(args: &InitArgs, path: &std::path::Path) -> Result<()> {
    if path.exists() && !args.force {
        print_warning(&format!(
            "{} already exists; use --force to overwrite",
            path.display()
        ));
        return Ok(());
    }
    HedgeConfig::default().save(path)?;
    print_success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}
