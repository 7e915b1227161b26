//! Percent-change return derivation for price and purchase series.

use risk_core::{BenchmarkSeries, HoldingRecord, ReturnPoint, ReturnSeries};

/// Daily benchmark returns from consecutive closes. The first close has
/// no predecessor and yields no return.
pub fn benchmark_returns(series: &BenchmarkSeries) -> ReturnSeries {
    pct_change(series.points().iter().map(|p| (p.date, p.close)))
}

/// Asset returns from consecutive purchase prices across a ticker's own
/// lots, ordered by purchase date. This sequences trade prices, not
/// market value at observation dates.
pub fn holding_returns(records: &[HoldingRecord]) -> ReturnSeries {
    pct_change(records.iter().map(|r| (r.purchase_date, r.purchase_price)))
}

fn pct_change(
    points: impl Iterator<Item = (chrono::NaiveDate, f64)>,
) -> ReturnSeries {
    let points: Vec<_> = points.collect();
    points
        .windows(2)
        .filter_map(|w| {
            let (_, prev) = w[0];
            let (date, cur) = w[1];
            if prev != 0.0 {
                Some(ReturnPoint {
                    date,
                    value: (cur - prev) / prev,
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use risk_core::ClosePoint;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_benchmark_returns_skip_first() {
        let series = BenchmarkSeries::new(vec![
            ClosePoint { date: date("2024-01-02"), close: 100.0 },
            ClosePoint { date: date("2024-01-03"), close: 105.0 },
            ClosePoint { date: date("2024-01-04"), close: 103.95 },
        ])
        .unwrap();
        let returns = benchmark_returns(&series);
        assert_eq!(returns.len(), 2);
        assert_eq!(returns[0].date, date("2024-01-03"));
        assert!((returns[0].value - 0.05).abs() < 1e-12);
        assert!((returns[1].value - (-0.01)).abs() < 1e-12);
    }

    #[test]
    fn test_holding_returns_single_record_empty() {
        let records = vec![HoldingRecord {
            ticker: "C".to_string(),
            purchase_date: date("2024-01-02"),
            units: 1.0,
            purchase_price: 50.0,
        }];
        assert!(holding_returns(&records).is_empty());
    }

    #[test]
    fn test_zero_price_predecessor_skipped() {
        let series = BenchmarkSeries::new(vec![
            ClosePoint { date: date("2024-01-02"), close: 0.0 },
            ClosePoint { date: date("2024-01-03"), close: 105.0 },
            ClosePoint { date: date("2024-01-04"), close: 210.0 },
        ])
        .unwrap();
        let returns = benchmark_returns(&series);
        assert_eq!(returns.len(), 1);
        assert_eq!(returns[0].date, date("2024-01-04"));
    }
}
