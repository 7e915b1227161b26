use risk_core::{AlignedSample, ReturnPair, ReturnPoint};
use std::collections::HashMap;

/// Inner-join an asset return series with the benchmark return series on
/// date. Output order follows the asset series' ascending date order.
/// An empty result is not an error; the caller inspects sample size.
pub fn align(asset: &[ReturnPoint], benchmark: &[ReturnPoint]) -> AlignedSample {
    let by_date: HashMap<_, _> = benchmark.iter().map(|p| (p.date, p.value)).collect();

    let pairs = asset
        .iter()
        .filter_map(|p| {
            by_date.get(&p.date).map(|b| ReturnPair {
                date: p.date,
                asset: p.value,
                benchmark: *b,
            })
        })
        .collect();

    AlignedSample { pairs }
}
