//! End-to-end tests of the `cfhedge` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CURVE: &str = "\
date,discount_factor
2023-03-31,1
2023-06-27,0.992546003302532
2023-09-25,0.98372606051833
2024-03-23,0.965793001938513
2024-09-19,0.950633014135728
2025-03-18,0.93548977250842
2026-03-13,0.909328005327338
2027-03-08,0.885171820200998
2028-03-02,0.861412133635946
2029-02-25,0.837598185073091
";

const CURVE_Q2: &str = "\
date,discount_factor
2023-06-30,1
2023-09-25,0.99079
2024-03-23,0.97236
2025-03-18,0.94050
2026-03-13,0.91350
2028-03-02,0.86420
2029-02-25,0.84010
";

const TRADE: &str = r#"
trade_id = "IRS 001"
counterparty = "Bank A"
notional = 10000000.0
currency = "EUR"
inception_date = "2023-03-31"
trade_date = "2023-03-29"
maturity_date = "2028-03-31"
market_data_base_date = "2023-03-31"
day_count = "ACT/360"
nominal_value_of_debt = 10000000.0
floating_frequency = "3M"
floating_pay_receive = "RECEIVE"
fixed_rate = 0.0275
"#;

fn cfhedge(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cfhedge").unwrap();
    cmd.env("CFHEDGE_CONFIG", config_dir.join("config.toml"))
        .env_remove("RUST_LOG")
        .arg("--quiet");
    cmd
}

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("curve.csv"), CURVE).unwrap();
    std::fs::write(dir.path().join("trade.toml"), TRADE).unwrap();

    let market = dir.path().join("market");
    std::fs::create_dir(&market).unwrap();
    std::fs::write(market.join("EUR.3M.20230331.csv"), CURVE).unwrap();
    std::fs::write(market.join("EUR.3M.20230630.csv"), CURVE_Q2).unwrap();
    dir
}

#[test]
fn help_lists_commands() {
    let dir = workspace();
    cfhedge(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hedge"))
        .stdout(predicate::str::contains("interpolate"));
}

#[test]
fn interpolate_linear_json() {
    let dir = workspace();
    cfhedge(dir.path())
        .args(["--format", "json", "interpolate", "--xs", "1,2,3", "--ys", "10,20,40"])
        .args(["--at", "1.5,2.5", "--method", "linear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15.0"))
        .stdout(predicate::str::contains("30.0"));
}

#[test]
fn interpolate_rejects_unknown_method() {
    let dir = workspace();
    cfhedge(dir.path())
        .args(["interpolate", "--xs", "1,2", "--ys", "1,2", "--at", "1.5", "--method", "spline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SPLINE").or(predicate::str::contains("spline")));
}

#[test]
fn interpolate_rejects_mismatched_lists() {
    let dir = workspace();
    cfhedge(dir.path())
        .args(["interpolate", "--xs", "1,2,3", "--ys", "1,2", "--at", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("3 x values but 2 y values"));
}

#[test]
fn schedule_target_quarterly() {
    let dir = workspace();
    cfhedge(dir.path())
        .args(["--format", "csv", "schedule", "--effective", "2023-03-31"])
        .args(["--termination", "2024-03-31", "--tenor", "3M", "--currency", "EUR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-09-29"))
        .stdout(predicate::str::contains("2023-12-29"))
        .stdout(predicate::str::contains("2024-03-28"));
}

#[test]
fn curve_df_at_pillar() {
    let dir = workspace();
    let curve = dir.path().join("curve.csv");
    cfhedge(dir.path())
        .args(["--format", "csv", "curve", "df", "--file"])
        .arg(&curve)
        .args(["--at", "2023-06-27"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.992546003302532"));
}

#[test]
fn curve_from_market_data_requires_base_date() {
    let dir = workspace();
    cfhedge(dir.path())
        .args(["curve", "show", "--market-data"])
        .arg(dir.path().join("market"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--base-date"));
}

#[test]
fn curve_not_found_in_market_data() {
    let dir = workspace();
    cfhedge(dir.path())
        .args(["curve", "show", "--market-data"])
        .arg(dir.path().join("market"))
        .args(["--base-date", "2023-03-31", "--tenor", "6M"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MarketData.DiscountCurves.EUR.6M.20230331"));
}

#[test]
fn swap_valuation_json() {
    let dir = workspace();
    cfhedge(dir.path())
        .args(["--format", "json", "swap", "--trade"])
        .arg(dir.path().join("trade.toml"))
        .arg("--curve")
        .arg(dir.path().join("curve.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Fair Value"))
        .stdout(predicate::str::contains("Par Rate"));
}

#[test]
fn swap_table_has_twenty_periods() {
    let dir = workspace();
    let output = cfhedge(dir.path())
        .args(["--format", "csv", "swap", "--table", "--trade"])
        .arg(dir.path().join("trade.toml"))
        .arg("--curve")
        .arg(dir.path().join("curve.csv"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 21);
}

#[test]
fn hedge_with_observations_and_market_data() {
    let dir = workspace();
    let observations = dir.path().join("fv.csv");
    std::fs::write(
        &observations,
        "date,swap_fair_value,hypo_fair_value\n2023-06-30,,\n2023-08-15,95000,-90000\n",
    )
    .unwrap();

    cfhedge(dir.path())
        .args(["--format", "json", "hedge", "--trade"])
        .arg(dir.path().join("trade.toml"))
        .arg("--market-data")
        .arg(dir.path().join("market"))
        .arg("--observations")
        .arg(&observations)
        .args(["--terminate", "2023-09-29"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"state\": \"Terminated\""))
        .stdout(predicate::str::contains("\"cumulative_ineffectiveness\""));
}

#[test]
fn hedge_redesignation_needs_curve_at_new_date() {
    let dir = workspace();
    cfhedge(dir.path())
        .args(["hedge", "--trade"])
        .arg(dir.path().join("trade.toml"))
        .arg("--market-data")
        .arg(dir.path().join("market"))
        .args(["--dates", "2023-06-30", "--redesignate", "2023-07-14"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MarketData.DiscountCurves.EUR.3M.20230714"));
}

#[test]
fn hedge_table_output() {
    let dir = workspace();
    cfhedge(dir.path())
        .args(["hedge", "--detail", "--trade"])
        .arg(dir.path().join("trade.toml"))
        .arg("--curve")
        .arg(dir.path().join("curve.csv"))
        .arg("--market-data")
        .arg(dir.path().join("market"))
        .args(["--dates", "2023-06-30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New CFHR"))
        .stdout(predicate::str::contains("Retained Earnings"))
        .stdout(predicate::str::contains("2023-06-30"));
}

#[test]
fn config_init_then_show() {
    let dir = workspace();
    cfhedge(dir.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("config.toml").exists());

    cfhedge(dir.path())
        .args(["--format", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"default_interpolation\": \"exponential\""));

    cfhedge(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_market_data_dir_is_used() {
    let dir = workspace();
    let market = dir.path().join("market");
    std::fs::write(
        dir.path().join("config.toml"),
        format!("market_data_dir = {:?}\ndefault_format = \"csv\"\n", market.display().to_string()),
    )
    .unwrap();

    cfhedge(dir.path())
        .args(["curve", "df", "--base-date", "2023-06-30", "--at", "2023-09-25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.99079"));
}

fn early_base_workspace() -> TempDir {
    let dir = workspace();
    let trade = TRADE.replace(
        r#"market_data_base_date = "2023-03-31""#,
        r#"market_data_base_date = "2023-03-30""#,
    );
    std::fs::write(dir.path().join("early.toml"), trade).unwrap();
    std::fs::write(
        dir.path().join("early.csv"),
        CURVE.replace("2023-03-31,1\n", "2023-03-30,1\n"),
    )
    .unwrap();
    dir
}

#[test]
fn hedge_with_base_date_before_inception() {
    let dir = early_base_workspace();
    let observations = dir.path().join("fv.csv");
    std::fs::write(
        &observations,
        "date,swap_fair_value,hypo_fair_value\n2023-06-30,95000,-90000\n",
    )
    .unwrap();

    cfhedge(dir.path())
        .args(["hedge", "--trade"])
        .arg(dir.path().join("early.toml"))
        .arg("--curve")
        .arg(dir.path().join("early.csv"))
        .arg("--observations")
        .arg(&observations)
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-06-30"))
        .stdout(predicate::str::contains("Total New CFHR"));
}

#[test]
fn hedge_redesignation_with_base_date_before_inception() {
    let dir = early_base_workspace();
    let observations = dir.path().join("fv.csv");
    std::fs::write(
        &observations,
        "date,swap_fair_value,hypo_fair_value\n2023-05-15,60000,-58000\n",
    )
    .unwrap();

    cfhedge(dir.path())
        .args(["--format", "json", "hedge", "--trade"])
        .arg(dir.path().join("early.toml"))
        .arg("--curve")
        .arg(dir.path().join("early.csv"))
        .arg("--market-data")
        .arg(dir.path().join("market"))
        .arg("--observations")
        .arg(&observations)
        .args(["--redesignate", "2023-06-30", "--redesignate-fv", "120000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"state\": \"Redesignated\""))
        .stdout(predicate::str::contains("2023-06-30"));
}
