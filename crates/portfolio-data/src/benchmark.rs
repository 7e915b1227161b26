use anyhow::{Context, Result};
use chrono::NaiveDate;
use risk_core::{BenchmarkSeries, ClosePoint};
use std::path::Path;

const DATE_COL: &str = "Date";
const CLOSE_COL: &str = "Close";

/// Date formats seen in downloaded index datasets.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%m/%d/%Y"];

/// Load the benchmark file. See [`parse_benchmark`].
pub fn load_benchmark(path: impl AsRef<Path>) -> Result<BenchmarkSeries> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading benchmark file {}", path.display()))?;
    parse_benchmark(&data)
}

/// Parse benchmark CSV data (`Date`, `Close`; extra columns ignored).
///
/// Rows with an unparseable date or close are skipped. The resulting
/// series is sorted by date; duplicate dates are an error.
pub fn parse_benchmark(csv_data: &str) -> Result<BenchmarkSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = reader.headers()?.clone();
    let col = |name: &str| headers.iter().position(|h| h.trim() == name);
    let date_idx = col(DATE_COL)
        .with_context(|| format!("benchmark file is missing the '{DATE_COL}' column"))?;
    let close_idx = col(CLOSE_COL)
        .with_context(|| format!("benchmark file is missing the '{CLOSE_COL}' column"))?;

    let mut points = Vec::new();
    for result in reader.records() {
        let record = result?;
        let date_raw = record.get(date_idx).unwrap_or("").trim();
        let close_raw = record.get(close_idx).unwrap_or("").trim();

        let Some(date) = parse_date(date_raw) else {
            tracing::debug!(date = %date_raw, "skipping benchmark row with unparseable date");
            continue;
        };
        let Ok(close) = close_raw.parse::<f64>() else {
            tracing::debug!(date = %date_raw, close = %close_raw, "skipping benchmark row with non-numeric close");
            continue;
        };

        points.push(ClosePoint { date, close });
    }

    Ok(BenchmarkSeries::new(points)?)
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
