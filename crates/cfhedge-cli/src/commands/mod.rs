//! CLI command implementations.

pub mod config;
pub mod curve;
pub mod hedge;
pub mod interpolate;
pub mod schedule;
pub mod swap;

pub use config::ConfigArgs;
pub use curve::CurveArgs;
pub use hedge::HedgeArgs;
pub use interpolate::InterpolateArgs;
pub use schedule::ScheduleArgs;
pub use swap::SwapArgs;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use cfhedge_core::types::Date;
use cfhedge_curves::prelude::*;

use crate::cli::OutputFormat;
use crate::config::HedgeConfig;
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration.
    pub config: HedgeConfig,
    /// Effective output format.
    pub format: OutputFormat,
    /// Suppress informational messages.
    pub quiet: bool,
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s.trim()).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a comma-separated list of numbers.
pub fn parse_f64_list(s: &str) -> CliResult<Vec<f64>> {
    s.split(',')
        .filter(|item| !item.trim().is_empty())
        .map(|item| {
            item.trim()
                .parse::<f64>()
                .map_err(|_| CliError::InvalidList(s.to_string()))
        })
        .collect()
}

/// Parses a comma-separated list of dates.
pub fn parse_date_list(s: &str) -> CliResult<Vec<Date>> {
    s.split(',')
        .filter(|item| !item.trim().is_empty())
        .map(parse_date)
        .collect()
}

/// Where swap and hedge commands find their curves.
#[derive(Args, Debug, Clone, Default)]
pub struct CurveSourceArgs {
    /// CSV curve file (date,discount_factor) for the trade's base date
    #[arg(long)]
    pub curve: Option<PathBuf>,

    /// Directory of {CCY}.{TENOR}.{yyyyMMdd}.csv curve files
    #[arg(long)]
    pub market_data: Option<PathBuf>,
}

impl CurveSourceArgs {
    /// Builds the curve store: the market-data directory (argument or
    /// configuration), with the `--curve` file stored under `key`.
    pub fn store(&self, ctx: &Context, key: &CurveKey) -> Result<CurveStore> {
        let dir = self
            .market_data
            .clone()
            .or_else(|| ctx.config.market_data_dir.clone());

        let mut store = match &dir {
            Some(dir) => load_market_data_dir(dir)
                .with_context(|| format!("loading market data from {}", dir.display()))?,
            None => CurveStore::new(),
        };

        if let Some(file) = &self.curve {
            let curve = load_curve_csv(file, Some(key.as_of))
                .with_context(|| format!("loading curve {}", file.display()))?;
            store.insert(*key, curve, true)?;
        } else if dir.is_none() {
            return Err(CliError::MissingArgument("--curve or --market-data".into()).into());
        }

        tracing::debug!(curves = store.len(), "curve store ready");
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lists() {
        assert_eq!(parse_f64_list("1, 2.5,3").unwrap(), vec![1.0, 2.5, 3.0]);
        assert!(parse_f64_list("1,x").is_err());
        let dates = parse_date_list("2023-03-31,2023-06-30").unwrap();
        assert_eq!(dates[1], Date::from_ymd(2023, 6, 30).unwrap());
        assert!(matches!(parse_date("31/03/2023"), Err(CliError::InvalidDate(_))));
    }
}
