use risk_core::{HoldingRow, MetricsError, MetricsRecord, ReturnPoint};
use risk_metrics::{align, returns, MetricsCalculator};

/// Process one ticker: parse its raw holdings, derive the return series,
/// align against the benchmark returns, compute the metrics record.
///
/// Every failure comes back as an error; the dispatcher decides whether
/// to log and drop. Nothing here panics on malformed input.
pub fn process(
    ticker: &str,
    rows: &[HoldingRow],
    benchmark_returns: &[ReturnPoint],
) -> Result<MetricsRecord, MetricsError> {
    let mut records = rows
        .iter()
        .map(|r| r.parse())
        .collect::<Result<Vec<_>, _>>()?;
    records.sort_by_key(|r| r.purchase_date);

    let asset_returns = returns::holding_returns(&records);
    let sample = align(&asset_returns, benchmark_returns);
    MetricsCalculator::compute(ticker, &sample)
}
