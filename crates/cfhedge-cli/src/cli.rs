//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{
    ConfigArgs, CurveArgs, HedgeArgs, InterpolateArgs, ScheduleArgs, SwapArgs,
};

/// CFHedge - Cash-flow hedge accounting for interest rate swaps
#[derive(Parser)]
#[command(name = "cfhedge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file
    #[arg(short, long, global = true, env = "CFHEDGE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect a discount curve
    Curve(CurveArgs),

    /// Interpolate a value between pillars
    Interpolate(InterpolateArgs),

    /// Generate a payment schedule
    Schedule(ScheduleArgs),

    /// Value a swap trade
    Swap(SwapArgs),

    /// Run the effectiveness test and reserve roll-forward for a trade
    Hedge(HedgeArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
