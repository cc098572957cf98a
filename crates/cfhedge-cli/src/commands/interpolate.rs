//! Interpolate command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use cfhedge_math::prelude::*;

use crate::commands::{parse_f64_list, Context};
use crate::error::CliError;
use crate::output::{print_header, print_output};

/// Arguments for the interpolate command.
#[derive(Args, Debug)]
pub struct InterpolateArgs {
    /// Pillar x values, strictly increasing (comma-separated)
    #[arg(long, allow_hyphen_values = true)]
    pub xs: String,

    /// Pillar y values (comma-separated)
    #[arg(long, allow_hyphen_values = true)]
    pub ys: String,

    /// Points to evaluate (comma-separated)
    #[arg(long, allow_hyphen_values = true)]
    pub at: String,

    /// LINEAR, EXPONENTIAL or FLAT (defaults to the configured method)
    #[arg(short, long)]
    pub method: Option<InterpolationMethod>,

    /// Behaviour above the last pillar: FLAT or NATURAL
    #[arg(short, long, default_value = "FLAT")]
    pub extrapolation: Extrapolation,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct InterpolatedRow {
    #[tabled(rename = "x")]
    x: f64,
    #[tabled(rename = "y")]
    y: f64,
}

/// Execute the interpolate command.
pub fn execute(args: InterpolateArgs, ctx: &Context) -> Result<()> {
    let xs = parse_f64_list(&args.xs)?;
    let ys = parse_f64_list(&args.ys)?;
    if xs.len() != ys.len() {
        return Err(CliError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        }
        .into());
    }
    let method = match args.method {
        Some(method) => method,
        None => ctx.config.default_interpolation.parse()?,
    };

    let rows = parse_f64_list(&args.at)?
        .into_iter()
        .map(|x| {
            Ok(InterpolatedRow {
                x,
                y: interpolate(&xs, &ys, x, method, args.extrapolation)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    print_header(&format!("{method} interpolation, {} extrapolation", args.extrapolation), ctx.format);
    print_output(&rows, ctx.format)
}
