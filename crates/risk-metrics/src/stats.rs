/// Pure statistical helpers for the metrics calculator.
/// Stateless functions on f64 slices — no I/O, no external state.

/// OLS regression: y = alpha + beta * x.
/// Returns (alpha, beta, r_squared). With zero predictor variance the
/// slope degenerates to 0 and the intercept to mean(y).
pub fn ols_regression(y: &[f64], x: &[f64]) -> (f64, f64, f64) {
    let n = y.len().min(x.len());
    if n < 2 {
        return (f64::NAN, f64::NAN, f64::NAN);
    }
    let nf = n as f64;
    let x_mean: f64 = x[..n].iter().sum::<f64>() / nf;
    let y_mean: f64 = y[..n].iter().sum::<f64>() / nf;

    let mut ss_xy = 0.0;
    let mut ss_xx = 0.0;
    let mut ss_yy = 0.0;
    for i in 0..n {
        let dx = x[i] - x_mean;
        let dy = y[i] - y_mean;
        ss_xy += dx * dy;
        ss_xx += dx * dx;
        ss_yy += dy * dy;
    }

    if ss_xx < 1e-15 {
        return (y_mean, 0.0, 0.0);
    }

    let beta = ss_xy / ss_xx;
    let alpha = y_mean - beta * x_mean;
    let r_squared = if ss_yy > 1e-15 {
        (ss_xy * ss_xy) / (ss_xx * ss_yy)
    } else {
        0.0
    };

    (alpha, beta, r_squared)
}

/// Skewness from population moments: m3 / m2^1.5. NaN for zero variance.
pub fn skewness(xs: &[f64]) -> f64 {
    let n = xs.len() as f64;
    if n == 0.0 {
        return f64::NAN;
    }
    let mean = xs.iter().sum::<f64>() / n;
    let m2 = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let m3 = xs.iter().map(|x| (x - mean).powi(3)).sum::<f64>() / n;
    if m2 == 0.0 {
        return f64::NAN;
    }
    m3 / m2.powf(1.5)
}

/// Excess kurtosis from population moments: m4 / m2² − 3 (normal → 0).
/// NaN for zero variance.
pub fn excess_kurtosis(xs: &[f64]) -> f64 {
    let n = xs.len() as f64;
    if n == 0.0 {
        return f64::NAN;
    }
    let mean = xs.iter().sum::<f64>() / n;
    let m2 = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let m4 = xs.iter().map(|x| (x - mean).powi(4)).sum::<f64>() / n;
    if m2 == 0.0 {
        return f64::NAN;
    }
    m4 / (m2 * m2) - 3.0
}

/// Percentile with linear interpolation between order statistics
/// (rank = pct/100 * (n−1)). NaN for an empty slice.
pub fn percentile(xs: &[f64], pct: f64) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Max drawdown of the cumulative-product wealth curve built from
/// (1 + return). Result is the most negative peak-relative decline,
/// always ≤ 0; NaN for an empty series.
pub fn max_drawdown(returns: &[f64]) -> f64 {
    if returns.is_empty() {
        return f64::NAN;
    }
    let mut wealth = 1.0;
    let mut peak = f64::MIN;
    let mut min_dd = 0.0_f64;
    for r in returns {
        wealth *= 1.0 + r;
        if wealth > peak {
            peak = wealth;
        }
        let dd = (wealth - peak) / peak;
        if dd < min_dd {
            min_dd = dd;
        }
    }
    min_dd
}
