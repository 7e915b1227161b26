//! metrics-runner: compute per-holding risk metrics against a benchmark.
//!
//! Loads the holdings and benchmark files, fans out one task per distinct
//! ticker, and writes the summary report. Per-ticker failures are logged
//! and dropped; only a missing/corrupt input file or an unwritable output
//! fails the run.
//!
//! Usage:
//!   cargo run -p metrics-runner
//!   cargo run -p metrics-runner -- --holdings portfolio_data.csv --benchmark spy_data.csv
//!   cargo run -p metrics-runner -- --output stock_metrics_summary.csv --concurrency 4

use anyhow::Result;

const DEFAULT_HOLDINGS: &str = "portfolio_data.csv";
const DEFAULT_BENCHMARK: &str = "spy_data.csv";
const DEFAULT_OUTPUT: &str = "stock_metrics_summary.csv";

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "metrics_runner=info,batch_engine=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let flag_value = |name: &str| {
        args.iter()
            .position(|a| a == name)
            .and_then(|i| args.get(i + 1))
            .map(|s| s.as_str())
    };

    let holdings_path = flag_value("--holdings").unwrap_or(DEFAULT_HOLDINGS);
    let benchmark_path = flag_value("--benchmark").unwrap_or(DEFAULT_BENCHMARK);
    let output_path = flag_value("--output").unwrap_or(DEFAULT_OUTPUT);
    let concurrency: Option<usize> = flag_value("--concurrency").and_then(|v| v.parse().ok());

    let benchmark = portfolio_data::load_benchmark(benchmark_path)?;
    tracing::info!(
        path = benchmark_path,
        points = benchmark.len(),
        "loaded benchmark series"
    );

    let rows = portfolio_data::load_holdings(holdings_path)?;
    let holdings = batch_engine::group_by_ticker(rows);
    tracing::info!(
        path = holdings_path,
        tickers = holdings.len(),
        "loaded holdings"
    );

    let report = match concurrency {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| batch_engine::run(&holdings, &benchmark))
        }
        None => batch_engine::run(&holdings, &benchmark),
    };

    portfolio_data::write_summary(&report, output_path)?;
    tracing::info!(
        path = output_path,
        rows = report.len(),
        skipped = holdings.len() - report.len(),
        "summary report written"
    );

    Ok(())
}
