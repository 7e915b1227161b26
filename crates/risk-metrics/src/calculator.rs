use crate::stats;
use risk_core::{AlignedSample, MetricsError, MetricsRecord};
use statrs::statistics::Statistics;

pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Compute the full risk-metrics record for one ticker from its
    /// aligned return sample.
    ///
    /// Requires at least 2 aligned observations. Every ratio with a zero
    /// or undefined denominator degrades to NaN in its own field; nothing
    /// here panics or aborts the batch.
    pub fn compute(ticker: &str, sample: &AlignedSample) -> Result<MetricsRecord, MetricsError> {
        if sample.len() < 2 {
            return Err(MetricsError::InsufficientData(format!(
                "{}: {} aligned observations, need at least 2",
                ticker,
                sample.len()
            )));
        }

        let asset = sample.asset_returns();
        let benchmark = sample.benchmark_returns();

        // Regression of asset on benchmark is the only place the
        // benchmark column is used.
        let (alpha, beta, r_squared) = stats::ols_regression(&asset, &benchmark);

        let mean = asset.as_slice().mean();
        let std_dev = asset.as_slice().std_dev();
        let sharpe = if std_dev > 0.0 { mean / std_dev } else { f64::NAN };

        // Sample std of the strictly-negative returns; NaN for fewer
        // than two downside observations.
        let downside: Vec<f64> = asset.iter().copied().filter(|r| *r < 0.0).collect();
        let downside_std = downside.as_slice().std_dev();
        let sortino = if downside_std > 0.0 {
            mean / downside_std
        } else {
            f64::NAN
        };

        let treynor = if beta != 0.0 { mean / beta } else { f64::NAN };

        let gains: f64 = asset.iter().copied().filter(|r| *r > 0.0).sum();
        let losses: f64 = -asset.iter().copied().filter(|r| *r < 0.0).sum::<f64>();
        let omega = if losses > 0.0 { gains / losses } else { f64::NAN };

        Ok(MetricsRecord {
            ticker: ticker.to_string(),
            alpha,
            beta,
            r_squared,
            sharpe,
            sortino,
            treynor,
            omega,
            kurtosis: stats::excess_kurtosis(&asset),
            skewness: stats::skewness(&asset),
            max_drawdown: stats::max_drawdown(&asset),
            var_95: stats::percentile(&asset, 5.0),
        })
    }
}
