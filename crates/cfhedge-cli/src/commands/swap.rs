//! Swap command implementation.
//!
//! Values a trade's swap and optionally prints its cash-flow evaluation
//! table.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use cfhedge_accounting::HedgeTrade;
use cfhedge_core::types::Date;
use cfhedge_swaps::table::{CashFlowRow, CashFlowTable};

use crate::commands::{parse_date, Context, CurveSourceArgs};
use crate::output::{format_amount, print_header, print_output, KeyValue};

/// Arguments for the swap command.
#[derive(Args, Debug)]
pub struct SwapArgs {
    /// Trade definition (TOML)
    #[arg(long)]
    pub trade: PathBuf,

    #[command(flatten)]
    pub curves: CurveSourceArgs,

    /// Valuation date (defaults to the trade's market data base date)
    #[arg(long, value_parser = parse_date)]
    pub as_of: Option<Date>,

    /// Print the cash-flow evaluation table
    #[arg(long)]
    pub table: bool,
}

/// Reads and validates a trade file.
pub fn load_trade(path: &Path) -> Result<HedgeTrade> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading trade {}", path.display()))?;
    HedgeTrade::from_toml_str(&content).with_context(|| format!("parsing trade {}", path.display()))
}

#[derive(Debug, Clone, Serialize, Tabled)]
pub(crate) struct TableRow {
    #[tabled(rename = "Start")]
    start: Date,
    #[tabled(rename = "End")]
    end: Date,
    #[tabled(rename = "Rate")]
    floating_rate: String,
    #[tabled(rename = "DF")]
    discount_factor: String,
    #[tabled(rename = "Receive")]
    receive: String,
    #[tabled(rename = "Pay")]
    pay: String,
    #[tabled(rename = "Rec - Pay (PV)")]
    receive_minus_pay: String,
    #[tabled(rename = "Variable")]
    variable_receive: String,
    #[tabled(rename = "Fixed")]
    fixed_pay: String,
    #[tabled(rename = "Net")]
    net_cash_flow: String,
    #[tabled(rename = "Amort. Ratio")]
    ratio: String,
    #[tabled(rename = "CF Amort.")]
    cash_flow_amortisation: String,
}

impl From<&CashFlowRow> for TableRow {
    fn from(row: &CashFlowRow) -> Self {
        let (ratio, cash_flow_amortisation) = match &row.amortisation {
            Some(a) => (format!("{:.6}", a.ratio), format_amount(a.cash_flow_amortisation)),
            None => (String::new(), String::new()),
        };
        Self {
            start: row.start,
            end: row.end,
            floating_rate: format!("{:.6}", row.floating_rate),
            discount_factor: format!("{:.8}", row.discount_factor),
            receive: format_amount(row.receive),
            pay: format_amount(row.pay),
            receive_minus_pay: format_amount(row.receive_minus_pay),
            variable_receive: format_amount(row.variable_receive),
            fixed_pay: format_amount(row.fixed_pay),
            net_cash_flow: format_amount(row.net_cash_flow),
            ratio,
            cash_flow_amortisation,
        }
    }
}

/// Prints a cash-flow evaluation table.
pub(crate) fn print_table(title: &str, table: &CashFlowTable, ctx: &Context) -> Result<()> {
    let rows: Vec<TableRow> = table.rows().iter().map(TableRow::from).collect();
    print_header(
        &format!("{title} at {} (MtM {})", table.hedging_date(), format_amount(table.mtm())),
        ctx.format,
    );
    print_output(&rows, ctx.format)
}

/// Execute the swap command.
pub fn execute(args: SwapArgs, ctx: &Context) -> Result<()> {
    let trade = load_trade(&args.trade)?;
    let as_of = args.as_of.unwrap_or(trade.market_data_base_date);
    let key = trade.curve_key(as_of);
    let store = args.curves.store(ctx, &key)?;
    let curve = store.get(&key)?;

    let swap = trade.swap()?;
    let valuation = swap.valuation(&curve, as_of)?;
    tracing::info!(trade_id = %trade.trade_id, %as_of, fair_value = valuation.fair_value, "swap valued");

    if args.table {
        let table = CashFlowTable::build(
            &swap,
            &curve,
            as_of,
            trade.nominal_value_of_debt,
            trade.premium_paid,
            trade.table_conventions(),
        )?;
        return print_table(&format!("{} evaluation table", trade.trade_id), &table, ctx);
    }

    let mut results = vec![
        KeyValue::from_f64("Fair Value", valuation.fair_value, 2),
        KeyValue::new("Trade", trade.trade_id.clone()),
        KeyValue::new("Swap Type", swap.swap_type().to_string()),
        KeyValue::new("Valuation Date", as_of.to_string()),
        KeyValue::new("Curve", key.to_string()),
        KeyValue::new("Remaining Periods", valuation.remaining_periods.to_string()),
        KeyValue::from_f64("Fixed Leg NPV", valuation.fixed_leg_npv, 2),
        KeyValue::from_f64("Floating Leg NPV", valuation.floating_leg_npv, 2),
        KeyValue::from_f64("Annuity", valuation.annuity, 2),
        KeyValue::from_percent("Fixed Rate", swap.fixed_rate()),
    ];
    if let Some(par) = valuation.par_rate {
        results.push(KeyValue::from_percent("Par Rate", par));
    }

    print_header(&format!("Swap valuation: {}", trade.trade_id), ctx.format);
    print_output(&results, ctx.format)
}
