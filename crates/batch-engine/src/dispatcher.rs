//! Fan-out/fan-in over the portfolio's distinct tickers.
//!
//! One task per ticker on the rayon pool, read-only benchmark shared
//! across tasks, unordered completion. Per-ticker failures are logged
//! and dropped so a bad ticker never blocks the rest of the portfolio.

use crate::task;
use rayon::prelude::*;
use risk_core::{BenchmarkSeries, HoldingRow, MetricsError, SummaryReport};
use risk_metrics::returns;
use std::collections::BTreeMap;

/// Holdings rows grouped by distinct ticker.
pub type HoldingsByTicker = BTreeMap<String, Vec<HoldingRow>>;

/// Group raw holdings rows by ticker. Rows with an empty ticker are
/// dropped here; everything else is preserved as loaded.
pub fn group_by_ticker(rows: Vec<HoldingRow>) -> HoldingsByTicker {
    let mut grouped: HoldingsByTicker = BTreeMap::new();
    for row in rows {
        if row.ticker.trim().is_empty() {
            continue;
        }
        grouped.entry(row.ticker.clone()).or_default().push(row);
    }
    grouped
}

/// Run the per-asset pipeline for every distinct ticker and collect the
/// successful records into a report sorted by ticker.
///
/// Blocks until every task has completed. The dispatcher itself cannot
/// fail: an all-empty report is a valid result.
pub fn run(holdings: &HoldingsByTicker, benchmark: &BenchmarkSeries) -> SummaryReport {
    // Benchmark returns are derived once, before fan-out.
    let benchmark_returns = returns::benchmark_returns(benchmark);

    let mut report: SummaryReport = holdings
        .par_iter()
        .filter_map(|(ticker, rows)| {
            match task::process(ticker, rows, &benchmark_returns) {
                Ok(record) => Some(record),
                Err(MetricsError::InsufficientData(reason)) => {
                    tracing::debug!(ticker = %ticker, %reason, "skipping ticker");
                    None
                }
                Err(err) => {
                    tracing::warn!(ticker = %ticker, error = %err, "dropping ticker");
                    None
                }
            }
        })
        .collect();

    // Completion order is nondeterministic; sort for reproducible output.
    report.sort_by(|a, b| a.ticker.cmp(&b.ticker));
    report
}
