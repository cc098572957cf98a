//! Shared fixtures for unit tests.

use cfhedge_core::daycounts::DayCountConvention;
use cfhedge_core::types::{Currency, Date, PayReceive};
use cfhedge_curves::DiscountCurve;

use crate::trade::HedgeTrade;

pub(crate) fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

pub(crate) fn sample_trade() -> HedgeTrade {
    HedgeTrade {
        trade_id: "IRS 001".into(),
        counterparty: "Bank A".into(),
        notional: 10_000_000.0,
        currency: Currency::EUR,
        inception_date: d(2023, 3, 31),
        trade_date: d(2023, 3, 29),
        maturity_date: d(2026, 3, 31),
        market_data_base_date: d(2023, 3, 31),
        day_count: DayCountConvention::Act360,
        nominal_value_of_debt: 10_000_000.0,
        premium_paid: 0.0,
        floating_frequency: "3M".parse().unwrap(),
        floating_pay_receive: PayReceive::Receive,
        fixed_rate: 0.0275,
    }
}

/// Upward-sloping curve; `shift` is a parallel continuous-rate shock.
pub(crate) fn curve_at(base: Date, shift: f64) -> DiscountCurve {
    let pillars = [(0, 1.0), (1, 0.968), (2, 0.937), (3, 0.905), (5, 0.845), (10, 0.70)];
    let mut dates = Vec::new();
    let mut dfs = Vec::new();
    for (years, df) in pillars {
        dates.push(base.add_years(years).unwrap());
        dfs.push(df * (-shift * f64::from(years)).exp());
    }
    DiscountCurve::new(base, dates, dfs).unwrap()
}
