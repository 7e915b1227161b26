//! End-to-end pipeline tests: CSV in, dispatcher fan-out, summary out.

use chrono::{Duration, NaiveDate};
use std::fmt::Write as _;

/// 252 consecutive daily closes starting 2023-06-01, mild oscillation.
fn benchmark_csv() -> String {
    let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
    let mut csv = String::from("Date,Close\n");
    for i in 0..252 {
        let date = start + Duration::days(i);
        let close = 100.0 + (i % 7) as f64 - (i % 3) as f64;
        writeln!(csv, "{},{}", date.format("%Y-%m-%d"), close).unwrap();
    }
    csv
}

fn run_pipeline(holdings_csv: &str) -> risk_core::SummaryReport {
    let benchmark = portfolio_data::parse_benchmark(&benchmark_csv()).unwrap();
    let rows = portfolio_data::parse_holdings(holdings_csv).unwrap();
    let holdings = batch_engine::group_by_ticker(rows);
    batch_engine::run(&holdings, &benchmark)
}

#[test]
fn fault_isolation_corrupt_ticker_dropped() {
    // A has 5 valid lots on benchmark dates; B carries a corrupted price.
    let holdings = "\
Stock Ticker,Date Purchased,Units Purchased,Purchase Price
A,05-06-2023,10,100.00
A,06-06-2023,10,104.00
A,07-06-2023,10,101.00
A,08-06-2023,10,99.00
A,09-06-2023,10,103.00
B,05-06-2023,2,50.00
B,06-06-2023,2,corrupted
B,07-06-2023,2,52.00
";
    let report = run_pipeline(holdings);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].ticker, "A");
    assert!(report[0].beta.is_finite());
    assert!(report[0].max_drawdown <= 0.0);
}

#[test]
fn single_holding_ticker_excluded() {
    let holdings = "\
Stock Ticker,Date Purchased,Units Purchased,Purchase Price
A,05-06-2023,10,100.00
A,06-06-2023,10,104.00
A,07-06-2023,10,101.00
C,05-06-2023,1,42.00
";
    let report = run_pipeline(holdings);
    let tickers: Vec<_> = report.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["A"]);
}

#[test]
fn no_common_dates_ticker_excluded() {
    // D's purchases predate the benchmark window entirely.
    let holdings = "\
Stock Ticker,Date Purchased,Units Purchased,Purchase Price
A,05-06-2023,10,100.00
A,06-06-2023,10,104.00
A,07-06-2023,10,101.00
D,05-06-2020,1,10.00
D,06-06-2020,1,11.00
D,07-06-2020,1,12.00
";
    let report = run_pipeline(holdings);
    let tickers: Vec<_> = report.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["A"]);
}

#[test]
fn report_sorted_by_ticker() {
    let holdings = "\
Stock Ticker,Date Purchased,Units Purchased,Purchase Price
ZZZ,05-06-2023,1,100.00
ZZZ,06-06-2023,1,101.00
ZZZ,07-06-2023,1,99.00
AAA,05-06-2023,1,10.00
AAA,06-06-2023,1,11.00
AAA,07-06-2023,1,10.50
";
    let report = run_pipeline(holdings);
    let tickers: Vec<_> = report.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["AAA", "ZZZ"]);
}

#[test]
fn dispatcher_is_idempotent() {
    let holdings = "\
Stock Ticker,Date Purchased,Units Purchased,Purchase Price
A,05-06-2023,10,100.00
A,06-06-2023,10,104.00
A,07-06-2023,10,101.00
A,08-06-2023,10,99.00
ZZZ,05-06-2023,1,10.00
ZZZ,06-06-2023,1,11.00
ZZZ,07-06-2023,1,10.50
";
    let first = run_pipeline(holdings);
    let second = run_pipeline(holdings);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.ticker, b.ticker);
        assert!(float_eq(a.alpha, b.alpha));
        assert!(float_eq(a.beta, b.beta));
        assert!(float_eq(a.sharpe, b.sharpe));
        assert!(float_eq(a.sortino, b.sortino));
        assert!(float_eq(a.var_95, b.var_95));
    }
}

#[test]
fn summary_round_trip_preserves_records() {
    let holdings = "\
Stock Ticker,Date Purchased,Units Purchased,Purchase Price
A,05-06-2023,10,100.00
A,06-06-2023,10,104.00
A,07-06-2023,10,101.00
A,08-06-2023,10,99.00
";
    let report = run_pipeline(holdings);
    assert_eq!(report.len(), 1);

    let mut buf = Vec::new();
    portfolio_data::summary::write_summary_to(&report, &mut buf).unwrap();
    let read_back = portfolio_data::summary::read_summary_from(buf.as_slice()).unwrap();

    assert_eq!(read_back.len(), report.len());
    for (a, b) in report.iter().zip(read_back.iter()) {
        assert_eq!(a.ticker, b.ticker);
        assert!(float_eq(a.alpha, b.alpha));
        assert!(float_eq(a.beta, b.beta));
        assert!(float_eq(a.r_squared, b.r_squared));
        assert!(float_eq(a.sharpe, b.sharpe));
        assert!(float_eq(a.sortino, b.sortino));
        assert!(float_eq(a.treynor, b.treynor));
        assert!(float_eq(a.omega, b.omega));
        assert!(float_eq(a.kurtosis, b.kurtosis));
        assert!(float_eq(a.skewness, b.skewness));
        assert!(float_eq(a.max_drawdown, b.max_drawdown));
        assert!(float_eq(a.var_95, b.var_95));
    }
}

fn float_eq(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || (a - b).abs() < 1e-9
}
