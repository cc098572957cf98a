//! Curve command implementation.
//!
//! Loads a discount curve from a CSV file or a market-data directory and
//! displays pillars, discount factors or forward rates.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use cfhedge_core::daycounts::DayCountConvention;
use cfhedge_core::types::{Currency, Date, Frequency, Tenor};
use cfhedge_curves::prelude::*;

use crate::commands::{parse_date, parse_date_list, Context};
use crate::error::CliError;
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(subcommand)]
    pub command: CurveCommand,
}

/// Curve subcommands.
#[derive(Subcommand, Debug)]
pub enum CurveCommand {
    /// Display the curve pillars with their zero rates
    Show(CurveSelect),

    /// Discount factors at given dates
    Df(DfArgs),

    /// Forward rate between two dates
    Forward(ForwardArgs),
}

/// Selects the curve to load.
#[derive(Args, Debug, Clone)]
pub struct CurveSelect {
    /// CSV curve file (date,discount_factor)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Directory of {CCY}.{TENOR}.{yyyyMMdd}.csv curve files
    #[arg(long)]
    pub market_data: Option<PathBuf>,

    /// Curve base date (YYYY-MM-DD); defaults to the file's first pillar
    #[arg(short, long, value_parser = parse_date)]
    pub base_date: Option<Date>,

    /// Curve currency
    #[arg(long, default_value = "EUR")]
    pub currency: Currency,

    /// Reset tenor the curve projects
    #[arg(short, long, default_value = "3M")]
    pub tenor: Tenor,
}

/// Arguments for discount factor queries.
#[derive(Args, Debug)]
pub struct DfArgs {
    #[command(flatten)]
    pub curve: CurveSelect,

    /// Dates to query (comma-separated YYYY-MM-DD)
    #[arg(long)]
    pub at: String,
}

/// Arguments for forward rate queries.
#[derive(Args, Debug)]
pub struct ForwardArgs {
    #[command(flatten)]
    pub curve: CurveSelect,

    /// Accrual start (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub start: Date,

    /// Accrual end (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub end: Date,

    /// Day count of the rate
    #[arg(long, default_value = "ACT/360")]
    pub day_count: DayCountConvention,

    /// Compounding of the rate
    #[arg(long, value_enum, default_value = "simple")]
    pub compounding: CompoundingChoice,
}

/// Compounding choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompoundingChoice {
    /// Simple interest
    Simple,
    /// Continuous compounding
    Continuous,
    /// Annual compounding
    Annual,
    /// Quarterly compounding
    Quarterly,
    /// Simple up to a quarter, quarterly compounded beyond
    #[value(name = "simple-then-quarterly")]
    SimpleThenQuarterly,
}

impl From<CompoundingChoice> for Compounding {
    fn from(choice: CompoundingChoice) -> Self {
        match choice {
            CompoundingChoice::Simple => Compounding::Simple,
            CompoundingChoice::Continuous => Compounding::Continuous,
            CompoundingChoice::Annual => Compounding::Compounded(Frequency::Annual),
            CompoundingChoice::Quarterly => Compounding::Compounded(Frequency::Quarterly),
            CompoundingChoice::SimpleThenQuarterly => {
                Compounding::SimpleThenCompounded(Frequency::Quarterly)
            }
        }
    }
}

impl CurveSelect {
    /// Loads the selected curve.
    pub fn load(&self, ctx: &Context) -> Result<Arc<DiscountCurve>> {
        if let Some(file) = &self.file {
            let curve = load_curve_csv(file, self.base_date)
                .with_context(|| format!("loading curve {}", file.display()))?;
            return Ok(Arc::new(curve));
        }

        let dir = self
            .market_data
            .clone()
            .or_else(|| ctx.config.market_data_dir.clone())
            .ok_or_else(|| CliError::MissingArgument("--file or --market-data".into()))?;
        let base_date = self
            .base_date
            .ok_or_else(|| CliError::MissingArgument("--base-date".into()))?;

        let store = load_market_data_dir(&dir)
            .with_context(|| format!("loading market data from {}", dir.display()))?;
        Ok(store.lookup(self.currency, self.tenor, base_date)?)
    }
}

/// One pillar of the curve.
#[derive(Debug, Clone, Serialize, Tabled)]
struct PillarRow {
    #[tabled(rename = "Date")]
    date: Date,
    #[tabled(rename = "Discount Factor")]
    discount_factor: f64,
    #[tabled(rename = "Zero Rate (cont.)")]
    zero_rate: f64,
}

/// A discount factor query result.
#[derive(Debug, Clone, Serialize, Tabled)]
struct DfRow {
    #[tabled(rename = "Date")]
    date: Date,
    #[tabled(rename = "Discount Factor")]
    discount_factor: f64,
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CurveCommand::Show(select) => execute_show(&select, ctx),
        CurveCommand::Df(df_args) => execute_df(&df_args, ctx),
        CurveCommand::Forward(fwd_args) => execute_forward(&fwd_args, ctx),
    }
}

fn execute_show(select: &CurveSelect, ctx: &Context) -> Result<()> {
    let curve = select.load(ctx)?;

    let rows = curve
        .dates()
        .iter()
        .zip(curve.discount_factors())
        .map(|(date, df)| {
            Ok(PillarRow {
                date: *date,
                discount_factor: *df,
                zero_rate: curve.zero_rate(*date, Compounding::Continuous)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    print_header(
        &format!("Discount curve as of {} ({} pillars)", curve.base_date(), rows.len()),
        ctx.format,
    );
    print_output(&rows, ctx.format)
}

fn execute_df(args: &DfArgs, ctx: &Context) -> Result<()> {
    let curve = args.curve.load(ctx)?;
    let rows = parse_date_list(&args.at)?
        .into_iter()
        .map(|date| {
            Ok(DfRow {
                date,
                discount_factor: curve.discount_factor(date)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    print_output(&rows, ctx.format)
}

fn execute_forward(args: &ForwardArgs, ctx: &Context) -> Result<()> {
    let curve = args.curve.load(ctx)?;
    let compounding = Compounding::from(args.compounding);
    let rate = curve.forward_rate(args.start, args.end, args.day_count, compounding)?;

    let results = vec![
        KeyValue::from_f64("Forward Rate", rate, 10),
        KeyValue::new("Start", args.start.to_string()),
        KeyValue::new("End", args.end.to_string()),
        KeyValue::new("Day Count", args.day_count.to_string()),
        KeyValue::new("Compounding", compounding.to_string()),
    ];
    print_output(&results, ctx.format)
}
