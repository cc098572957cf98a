//! Hedging instrument trade definition.

use serde::{Deserialize, Serialize};

use cfhedge_core::daycounts::DayCountConvention;
use cfhedge_core::types::{Currency, Date, PayReceive, Tenor};
use cfhedge_curves::CurveKey;
use cfhedge_swaps::table::TableConventions;
use cfhedge_swaps::{SwapTerms, VanillaSwap};

use crate::error::{AccountingError, AccountingResult};

/// An interest rate swap designated as the hedging instrument of a
/// cash-flow hedge.
///
/// ```rust
/// use cfhedge_accounting::HedgeTrade;
///
/// let trade = HedgeTrade::from_toml_str(r#"
///     trade_id = "IRS 001"
///     counterparty = "Bank A"
///     notional = 10000000.0
///     currency = "EUR"
///     inception_date = "2023-03-31"
///     trade_date = "2023-03-29"
///     maturity_date = "2028-03-31"
///     market_data_base_date = "2023-03-31"
///     day_count = "ACT/360"
///     nominal_value_of_debt = 10000000.0
///     premium_paid = 0.0
///     floating_frequency = "3M"
///     floating_pay_receive = "RECEIVE"
///     fixed_rate = 0.0275
/// "#).unwrap();
///
/// assert_eq!(trade.curve_key(trade.market_data_base_date).short_name(), "EUR.3M.20230331");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgeTrade {
    /// Trade identifier.
    pub trade_id: String,
    /// Counterparty name.
    #[serde(default)]
    pub counterparty: String,
    /// Swap notional.
    pub notional: f64,
    /// Trade currency.
    pub currency: Currency,
    /// Hedge designation date and swap effective date.
    pub inception_date: Date,
    /// Execution date.
    pub trade_date: Date,
    /// Swap termination date.
    pub maturity_date: Date,
    /// As-of date of the curve used at inception.
    pub market_data_base_date: Date,
    /// Day count of both legs.
    pub day_count: DayCountConvention,
    /// Nominal of the hedged debt.
    pub nominal_value_of_debt: f64,
    /// Premium paid for the swap.
    #[serde(default)]
    pub premium_paid: f64,
    /// Floating-leg payment frequency; also the curve's reset tenor.
    pub floating_frequency: Tenor,
    /// Whether the floating leg is paid or received.
    pub floating_pay_receive: PayReceive,
    /// Fixed-leg rate.
    pub fixed_rate: f64,
}

impl HedgeTrade {
    /// Parses and validates a trade from TOML.
    pub fn from_toml_str(s: &str) -> AccountingResult<Self> {
        let trade: HedgeTrade = toml::from_str(s)
            .map_err(|e| AccountingError::invalid_input(format!("cannot parse trade: {e}")))?;
        trade.validate()?;
        Ok(trade)
    }

    /// Checks the trade for values the engine cannot work with.
    pub fn validate(&self) -> AccountingResult<()> {
        if self.trade_id.trim().is_empty() {
            return Err(AccountingError::missing("trade id"));
        }
        if !self.notional.is_finite() || self.notional <= 0.0 {
            return Err(AccountingError::invalid_input(format!(
                "{}: notional must be positive, got {}",
                self.trade_id, self.notional
            )));
        }
        if !self.nominal_value_of_debt.is_finite() || self.nominal_value_of_debt < 0.0 {
            return Err(AccountingError::invalid_input(format!(
                "{}: nominal value of debt must be non-negative, got {}",
                self.trade_id, self.nominal_value_of_debt
            )));
        }
        if !self.premium_paid.is_finite() || !self.fixed_rate.is_finite() {
            return Err(AccountingError::invalid_input(format!(
                "{}: premium and fixed rate must be finite",
                self.trade_id
            )));
        }
        if self.maturity_date <= self.inception_date {
            return Err(AccountingError::invalid_input(format!(
                "{}: maturity {} is not after inception {}",
                self.trade_id, self.maturity_date, self.inception_date
            )));
        }
        if self.market_data_base_date > self.inception_date {
            return Err(AccountingError::invalid_input(format!(
                "{}: market data base date {} is after inception {}",
                self.trade_id, self.market_data_base_date, self.inception_date
            )));
        }
        Ok(())
    }

    /// Swap terms: effective at inception, terminating at maturity.
    pub fn swap_terms(&self) -> SwapTerms {
        SwapTerms {
            currency: self.currency,
            effective_date: self.inception_date,
            termination_date: self.maturity_date,
            payment_tenor: self.floating_frequency,
            day_count: self.day_count,
            notional: self.notional,
            fixed_rate: self.fixed_rate,
            floating: self.floating_pay_receive,
        }
    }

    /// Builds the hedging swap.
    pub fn swap(&self) -> AccountingResult<VanillaSwap> {
        Ok(VanillaSwap::new(&self.swap_terms())?)
    }

    /// Key of the curve this trade is valued on as of `as_of`.
    pub fn curve_key(&self, as_of: Date) -> CurveKey {
        CurveKey::new(self.currency, self.floating_frequency, as_of)
    }

    /// Evaluation-table conventions of the hedging swap.
    pub fn table_conventions(&self) -> TableConventions {
        TableConventions::hedging_instrument(self.day_count)
    }
}
