//! EUR 3M discount curve as of 2023-03-31.
//!
//! | Pillar     | Discount factor   |
//! |------------|-------------------|
//! | 2023-03-31 | 1                 |
//! | 2023-06-27 | 0.992546003302532 |
//! | 2023-09-25 | 0.98372606051833  |
//! | ...        | ...               |
//! | 2072-07-09 | 0.326344705702833 |

use approx::assert_relative_eq;
use cfhedge_core::daycounts::DayCountConvention;
use cfhedge_core::types::{Currency, Date, Frequency};
use cfhedge_core::ErrorKind;
use cfhedge_curves::prelude::*;

const PILLARS: [(&str, f64); 23] = [
    ("2023-03-31", 1.0),
    ("2023-06-27", 0.992546003302532),
    ("2023-09-25", 0.98372606051833),
    ("2024-03-23", 0.965793001938513),
    ("2024-09-19", 0.950633014135728),
    ("2025-03-18", 0.93548977250842),
    ("2026-03-13", 0.909328005327338),
    ("2027-03-08", 0.885171820200998),
    ("2028-03-02", 0.861412133635946),
    ("2029-02-25", 0.837598185073091),
    ("2030-02-20", 0.814693625969819),
    ("2031-02-15", 0.791420984482787),
    ("2032-02-10", 0.768273754674707),
    ("2033-02-04", 0.74499595976205),
    ("2034-01-30", 0.721975544062966),
    ("2035-01-25", 0.699501353208379),
    ("2038-01-09", 0.637074329844126),
    ("2042-12-14", 0.561397985196714),
    ("2047-11-18", 0.50593603603976),
    ("2052-10-22", 0.460967887738168),
    ("2057-09-26", 0.420435950960685),
    ("2062-08-31", 0.385153549010486),
    ("2072-07-09", 0.326344705702833),
];

fn fixture_csv() -> String {
    let mut csv = String::from("date,discount_factor\n");
    for (date, df) in PILLARS {
        csv.push_str(&format!("{date},{df}\n"));
    }
    csv
}

fn fixture_curve() -> DiscountCurve {
    read_curve_csv(fixture_csv().as_bytes(), None).unwrap()
}

#[test]
fn pillars_are_reproduced_exactly() {
    let curve = fixture_curve();
    for (date, df) in PILLARS {
        let date = Date::parse(date).unwrap();
        assert_eq!(curve.discount_factor(date).unwrap(), df, "{date}");
    }
}

#[test]
fn discount_factors_decrease_between_pillars() {
    let curve = fixture_curve();
    let base = curve.base_date();
    let mut previous = 1.0;
    for offset in (30..18_000).step_by(30) {
        let df = curve.discount_factor(base.add_days(offset)).unwrap();
        assert!(df < previous, "day {offset}: {df} >= {previous}");
        previous = df;
    }
}

#[test]
fn quarterly_forwards_are_positive_and_plausible() {
    let curve = fixture_curve();
    let compounding = Compounding::SimpleThenCompounded(Frequency::Quarterly);
    let mut start = curve.base_date();
    for _ in 0..40 {
        let end = start.add_months(3).unwrap();
        let fwd = curve
            .forward_rate(start, end, DayCountConvention::Act360, compounding)
            .unwrap();
        assert!(fwd > 0.0 && fwd < 0.06, "{start} -> {end}: {fwd}");
        start = end;
    }
}

#[test]
fn first_quarter_forward_matches_pillar_ratio() {
    let curve = fixture_curve();
    let start = Date::from_ymd(2023, 3, 31).unwrap();
    let end = Date::from_ymd(2023, 6, 27).unwrap();
    let fwd = curve
        .forward_rate(start, end, DayCountConvention::Act360, Compounding::Simple)
        .unwrap();
    assert_relative_eq!(fwd, (1.0 / 0.992546003302532 - 1.0) * 360.0 / 88.0, epsilon = 1e-14);
}

#[test]
fn store_round_trip_through_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("EUR.3M.20230331.csv"), fixture_csv()).unwrap();

    let store = load_market_data_dir(dir.path()).unwrap();
    let as_of = Date::from_ymd(2023, 3, 31).unwrap();
    let curve = store
        .lookup(Currency::EUR, "3M".parse().unwrap(), as_of)
        .unwrap();
    assert_eq!(curve.dates().len(), PILLARS.len());

    let missing = store
        .lookup(Currency::EUR, "6M".parse().unwrap(), as_of)
        .unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::CurveNotFound);
    assert!(missing.to_string().contains("MarketData.DiscountCurves.EUR.6M.20230331"));
}
