//! Hedge command implementation.
//!
//! Designates a trade, replays fair value observations (and an optional
//! redesignation and termination) and prints the reserve roll-forward.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use cfhedge_accounting::prelude::*;
use cfhedge_accounting::summary::totals;
use cfhedge_core::types::Date;
use cfhedge_curves::CurveStore;

use crate::cli::OutputFormat;
use crate::commands::swap::{load_trade, print_table};
use crate::commands::{parse_date, parse_date_list, Context, CurveSourceArgs};
use crate::error::CliError;
use crate::output::{format_amount, print_header, print_output, print_warning, KeyValue};

/// Arguments for the hedge command.
#[derive(Args, Debug)]
pub struct HedgeArgs {
    /// Trade definition (TOML)
    #[arg(long)]
    pub trade: PathBuf,

    #[command(flatten)]
    pub curves: CurveSourceArgs,

    /// Fair value observations (CSV: date,swap_fair_value,hypo_fair_value);
    /// rows with empty fair values are valued from market data
    #[arg(long)]
    pub observations: Option<PathBuf>,

    /// Additional test dates valued from market data (comma-separated)
    #[arg(long)]
    pub dates: Option<String>,

    /// New hedging date
    #[arg(long, value_parser = parse_date)]
    pub redesignate: Option<Date>,

    /// Swap fair value at the new hedging date, overriding the curve value
    #[arg(long, requires = "redesignate", allow_hyphen_values = true)]
    pub redesignate_fv: Option<f64>,

    /// Termination date
    #[arg(long, value_parser = parse_date)]
    pub terminate: Option<Date>,

    /// Print the effectiveness test columns
    #[arg(long)]
    pub detail: bool,

    /// Print the evaluation tables of each hedging date
    #[arg(long)]
    pub tables: bool,
}

#[derive(Debug, Deserialize)]
struct ObservationRecord {
    date: Date,
    #[serde(default)]
    swap_fair_value: Option<f64>,
    #[serde(default)]
    hypo_fair_value: Option<f64>,
}

impl ObservationRecord {
    fn into_event(self) -> Result<HedgeEvent> {
        match (self.swap_fair_value, self.hypo_fair_value) {
            (Some(swap), Some(hypo)) => Ok(HedgeEvent::Observe(FairValueObservation::new(
                self.date, swap, hypo,
            ))),
            (None, None) => Ok(HedgeEvent::ObserveMarket { date: self.date }),
            (Some(_), None) => {
                Err(CliError::MissingArgument(format!("hypo_fair_value on {}", self.date)).into())
            }
            (None, Some(_)) => {
                Err(CliError::MissingArgument(format!("swap_fair_value on {}", self.date)).into())
            }
        }
    }
}

/// Reads observation events from CSV.
fn read_observations(path: &Path) -> Result<Vec<HedgeEvent>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening observations {}", path.display()))?;

    let mut events = Vec::new();
    for (line, result) in reader.deserialize::<ObservationRecord>().enumerate() {
        let record =
            result.with_context(|| format!("{} row {}", path.display(), line + 1))?;
        events.push(record.into_event()?);
    }
    Ok(events)
}

fn event_date(event: &HedgeEvent) -> Option<Date> {
    match event {
        HedgeEvent::Observe(observation) => Some(observation.date),
        HedgeEvent::ObserveMarket { date } | HedgeEvent::Terminate { date } => Some(*date),
        HedgeEvent::Redesignate { date, .. } => *date,
    }
}

/// Orders the events: observations by date, the redesignation after the
/// observations on or before its date, termination last.
fn build_events(args: &HedgeArgs) -> Result<Vec<HedgeEvent>> {
    let mut events = match &args.observations {
        Some(path) => read_observations(path)?,
        None => Vec::new(),
    };
    if let Some(dates) = &args.dates {
        events.extend(
            parse_date_list(dates)?
                .into_iter()
                .map(|date| HedgeEvent::ObserveMarket { date }),
        );
    }
    if events.is_empty() && args.redesignate.is_none() && args.terminate.is_none() {
        return Err(CliError::MissingArgument("--observations or --dates".into()).into());
    }
    events.sort_by_key(event_date);

    if let Some(date) = args.redesignate {
        let at = events
            .iter()
            .position(|e| event_date(e).is_some_and(|d| d > date))
            .unwrap_or(events.len());
        events.insert(
            at,
            HedgeEvent::Redesignate {
                date: Some(date),
                swap_fair_value: args.redesignate_fv,
            },
        );
    }
    if let Some(date) = args.terminate {
        events.push(HedgeEvent::Terminate { date });
    }
    Ok(events)
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct SummaryLine {
    #[tabled(rename = "Date")]
    date: Date,
    #[tabled(rename = "New CFHR")]
    new_cfhr: String,
    #[tabled(rename = "Original Hedge Amortisation")]
    original_hedge_amortisation: String,
    #[tabled(rename = "Ineffectiveness")]
    ineffectiveness: String,
}

impl From<&SummaryRow> for SummaryLine {
    fn from(row: &SummaryRow) -> Self {
        Self {
            date: row.date,
            new_cfhr: format_amount(row.new_cfhr),
            original_hedge_amortisation: format_amount(row.original_hedge_amortisation),
            ineffectiveness: format_amount(row.ineffectiveness),
        }
    }
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct DetailLine {
    #[tabled(rename = "Date")]
    date: Date,
    #[tabled(rename = "Ratio")]
    date_ratio: String,
    #[tabled(rename = "Clean (real)")]
    real_clean: String,
    #[tabled(rename = "Cash (real)")]
    real_cash: String,
    #[tabled(rename = "Cumulative (real)")]
    real_cumulative: String,
    #[tabled(rename = "Clean (hypo)")]
    hypo_clean: String,
    #[tabled(rename = "Cash (hypo)")]
    hypo_cash: String,
    #[tabled(rename = "Cumulative (hypo)")]
    hypo_cumulative: String,
    #[tabled(rename = "Cum. Ineffectiveness")]
    cumulative_ineffectiveness: String,
}

impl From<&EffectivenessRecord> for DetailLine {
    fn from(record: &EffectivenessRecord) -> Self {
        Self {
            date: record.date,
            date_ratio: format!("{:.6}", record.date_ratio),
            real_clean: format_amount(record.real.clean_change),
            real_cash: format_amount(record.real.cash_settlement),
            real_cumulative: format_amount(record.real.cumulative_pre_settlement),
            hypo_clean: format_amount(record.hypo.clean_change),
            hypo_cash: format_amount(record.hypo.cash_settlement),
            hypo_cumulative: format_amount(record.hypo.cumulative_pre_settlement),
            cumulative_ineffectiveness: format_amount(record.cumulative_ineffectiveness),
        }
    }
}

/// Warns about segments whose hypothetical derivative is not at zero value
/// on its hedging date, valued on the curve the segment was calibrated with.
fn check_calibration(rel: &HedgeRelationship, store: &CurveStore, ctx: &Context) -> Result<()> {
    for segment in rel.segments() {
        let date = segment.hedging_date();
        let key = rel.trade().curve_key(segment.curve_date());
        if !store.contains(&key) {
            tracing::warn!(%key, %date, "calibration curve not in store, skipping check");
            continue;
        }
        let curve = store.get(&key)?;
        let value = segment.hypo().fair_value(&curve, date)?;
        if value.abs() > ctx.config.tolerance {
            print_warning(&format!(
                "hypothetical derivative at {date} has fair value {value:.8}, above tolerance {}",
                ctx.config.tolerance
            ));
        }
    }
    Ok(())
}

/// Execute the hedge command.
pub fn execute(args: HedgeArgs, ctx: &Context) -> Result<()> {
    let trade = load_trade(&args.trade)?;
    let store = args
        .curves
        .store(ctx, &trade.curve_key(trade.market_data_base_date))?;
    let input = RelationshipInput {
        events: build_events(&args)?,
        trade,
    };

    let rel = evaluate_relationship(&input, &store)
        .with_context(|| format!("evaluating {}", input.trade.trade_id))?;
    check_calibration(&rel, &store, ctx)?;

    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&RelationshipReport::from(&rel))?);
        return Ok(());
    }

    if args.tables {
        for segment in rel.segments() {
            print_table("Hedging instrument", segment.swap_table(), ctx)?;
            print_table("Hypothetical derivative", segment.hypo_table(), ctx)?;
        }
    }

    if args.detail {
        let details: Vec<DetailLine> = rel.records().map(DetailLine::from).collect();
        print_header("Effectiveness test", ctx.format);
        print_output(&details, ctx.format)?;
    }

    let rows = rel.summary();
    let summary: Vec<SummaryLine> = rows.iter().map(SummaryLine::from).collect();
    print_header(
        &format!("{}: {} ({} periods)", rel.trade().trade_id, rel.state(), summary.len()),
        ctx.format,
    );
    print_output(&summary, ctx.format)?;

    if ctx.format == OutputFormat::Table {
        let (total_cfhr, total_amortisation, total_ineffectiveness) = totals(&rows);
        let closing = rel.closing_balances();
        let mut balances = vec![
            KeyValue::from_f64("Total New CFHR", total_cfhr, 2),
            KeyValue::from_f64("Total Original Hedge Amortisation", total_amortisation, 2),
            KeyValue::from_f64("Total Ineffectiveness", total_ineffectiveness, 2),
            KeyValue::from_f64("New CFHR", closing.new_cfhr, 2),
            KeyValue::from_f64("Original Hedge Amortisation", closing.original_hedge_amortisation, 2),
            KeyValue::from_f64("Reclassification", closing.reclassification, 2),
            KeyValue::from_f64("Ineffectiveness", closing.ineffectiveness, 2),
            KeyValue::from_f64("Retained Earnings", closing.retained_earnings, 2),
        ];
        for segment in rel.segments() {
            balances.push(KeyValue::from_percent(
                format!("Hypo Rate ({})", segment.hedging_date()),
                segment.hypo().hypo_rate(),
            ));
        }
        print_header("Totals and closing balances", ctx.format);
        print_output(&balances, ctx.format)?;
    }

    Ok(())
}
