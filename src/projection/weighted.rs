/// Weighted average of `values` (most recent first) using the leading
/// weights, renormalized to sum to 1.
///
/// Only the first `min(values.len(), weights.len())` entries of each are
/// used. An all-zero weight prefix falls back to a plain mean of the same
/// values. Returns `None` when there is nothing to average.
pub fn weighted_average(values: &[f64], weights: &[f64]) -> Option<f64> {
    let n = values.len().min(weights.len());
    if n == 0 {
        return None;
    }
    let values = &values[..n];
    let weights = &weights[..n];

    let weight_sum: f64 = weights.iter().sum();
    if weight_sum == 0.0 {
        return Some(values.iter().sum::<f64>() / n as f64);
    }

    Some(
        values
            .iter()
            .zip(weights)
            .map(|(v, w)| v * (w / weight_sum))
            .sum(),
    )
}
