use anyhow::{Context, Result};
use chrono::NaiveDate;
use risk_core::HoldingRow;
use std::path::Path;

const TICKER_COL: &str = "Stock Ticker";
const DATE_COL: &str = "Date Purchased";
const UNITS_COL: &str = "Units Purchased";
const PRICE_COL: &str = "Purchase Price";

/// Day-month-year, as written by the portfolio editor.
const DATE_FORMAT: &str = "%d-%m-%Y";

/// Load the holdings file. See [`parse_holdings`].
pub fn load_holdings(path: impl AsRef<Path>) -> Result<Vec<HoldingRow>> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading holdings file {}", path.display()))?;
    parse_holdings(&data)
}

/// Parse holdings CSV data.
///
/// Required columns: `Stock Ticker`, `Date Purchased` (`%d-%m-%Y`),
/// `Purchase Price`. `Units Purchased` and any extra columns (e.g.
/// `Total Purchase Price`) are carried or ignored. Rows with an empty
/// ticker or an unparseable purchase date are excluded here; numeric
/// fields stay raw and are validated per ticker downstream.
pub fn parse_holdings(csv_data: &str) -> Result<Vec<HoldingRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = reader.headers()?.clone();
    let col = |name: &str| headers.iter().position(|h| h.trim() == name);
    let ticker_idx = col(TICKER_COL)
        .with_context(|| format!("holdings file is missing the '{TICKER_COL}' column"))?;
    let date_idx = col(DATE_COL)
        .with_context(|| format!("holdings file is missing the '{DATE_COL}' column"))?;
    let price_idx = col(PRICE_COL)
        .with_context(|| format!("holdings file is missing the '{PRICE_COL}' column"))?;
    let units_idx = col(UNITS_COL);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let ticker = record.get(ticker_idx).unwrap_or("").trim().to_string();
        if ticker.is_empty() {
            continue;
        }

        let date_raw = record.get(date_idx).unwrap_or("").trim();
        let purchase_date = match NaiveDate::parse_from_str(date_raw, DATE_FORMAT) {
            Ok(d) => d,
            Err(_) => {
                tracing::debug!(ticker = %ticker, date = %date_raw, "skipping row with unparseable purchase date");
                continue;
            }
        };

        rows.push(HoldingRow {
            ticker,
            purchase_date,
            units: units_idx
                .and_then(|i| record.get(i))
                .unwrap_or("0")
                .trim()
                .to_string(),
            purchase_price: record.get(price_idx).unwrap_or("").trim().to_string(),
        });
    }

    Ok(rows)
}
