use crate::error::MetricsError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One raw row of the holdings file.
///
/// The purchase date is validated at load time (rows with an unparseable
/// date never reach the pipeline), but the numeric columns stay raw:
/// they are parsed per ticker, so a bad value fails only its own ticker
/// instead of the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingRow {
    pub ticker: String,
    pub purchase_date: NaiveDate,
    pub units: String,
    pub purchase_price: String,
}

impl HoldingRow {
    pub fn parse(&self) -> Result<HoldingRecord, MetricsError> {
        let units: f64 = self.units.trim().parse().map_err(|_| {
            MetricsError::InvalidData(format!(
                "{}: non-numeric units '{}'",
                self.ticker, self.units
            ))
        })?;
        let purchase_price: f64 = self.purchase_price.trim().parse().map_err(|_| {
            MetricsError::InvalidData(format!(
                "{}: non-numeric purchase price '{}'",
                self.ticker, self.purchase_price
            ))
        })?;
        Ok(HoldingRecord {
            ticker: self.ticker.clone(),
            purchase_date: self.purchase_date,
            units,
            purchase_price,
        })
    }
}

/// A fully parsed holdings row (one lot/transaction).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingRecord {
    pub ticker: String,
    pub purchase_date: NaiveDate,
    pub units: f64,
    pub purchase_price: f64,
}

/// A single dated closing price of the benchmark index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClosePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Benchmark price series. Invariant: dates strictly increasing.
#[derive(Debug, Clone)]
pub struct BenchmarkSeries {
    points: Vec<ClosePoint>,
}

impl BenchmarkSeries {
    /// Build a series from unordered points. Sorts by date and rejects
    /// duplicate dates.
    pub fn new(mut points: Vec<ClosePoint>) -> Result<Self, MetricsError> {
        points.sort_by_key(|p| p.date);
        for w in points.windows(2) {
            if w[0].date == w[1].date {
                return Err(MetricsError::InvalidData(format!(
                    "duplicate benchmark date {}",
                    w[0].date
                )));
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[ClosePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One dated percentage return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Date-indexed return series, ascending by date. Only defined returns
/// appear: the first observation of a price series has no percent-change
/// and is never materialized.
pub type ReturnSeries = Vec<ReturnPoint>;

/// One date where both the asset and the benchmark have a return.
#[derive(Debug, Clone, Copy)]
pub struct ReturnPair {
    pub date: NaiveDate,
    pub asset: f64,
    pub benchmark: f64,
}

/// Inner join of an asset return series with the benchmark return series.
#[derive(Debug, Clone, Default)]
pub struct AlignedSample {
    pub pairs: Vec<ReturnPair>,
}

impl AlignedSample {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn asset_returns(&self) -> Vec<f64> {
        self.pairs.iter().map(|p| p.asset).collect()
    }

    pub fn benchmark_returns(&self) -> Vec<f64> {
        self.pairs.iter().map(|p| p.benchmark).collect()
    }
}

/// Risk metrics for one ticker. A field is NaN when its precondition is
/// unmet (zero denominator, no downside observations, ...). Serde renames
/// map straight onto the summary report columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsRecord {
    #[serde(rename = "Stock Ticker")]
    pub ticker: String,
    #[serde(rename = "Alpha")]
    pub alpha: f64,
    #[serde(rename = "Beta")]
    pub beta: f64,
    #[serde(rename = "R²")]
    pub r_squared: f64,
    #[serde(rename = "Sharpe Ratio")]
    pub sharpe: f64,
    #[serde(rename = "Sortino Ratio")]
    pub sortino: f64,
    #[serde(rename = "Treynor Ratio")]
    pub treynor: f64,
    #[serde(rename = "Omega Ratio")]
    pub omega: f64,
    #[serde(rename = "Kurtosis")]
    pub kurtosis: f64,
    #[serde(rename = "Skewness")]
    pub skewness: f64,
    #[serde(rename = "Max Drawdown")]
    pub max_drawdown: f64,
    #[serde(rename = "VaR (95%)")]
    pub var_95: f64,
}

/// One row per successfully processed ticker, sorted by ticker.
pub type SummaryReport = Vec<MetricsRecord>;
