//! Order statistics with linear interpolation between closest ranks.

use verdict_core::models::AgeQuartiles;

/// Quantile `q` in [0, 1] of ascending `sorted` data.
///
/// Interpolates linearly between the two closest ranks, matching the
/// default NumPy/pandas definition. Returns `None` for empty input.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    match sorted.len() {
        0 => None,
        1 => Some(sorted[0]),
        len => {
            let rank = q.clamp(0.0, 1.0) * (len - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let frac = rank - lower as f64;
            Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
        }
    }
}

/// 25th, 50th and 75th percentiles of unsorted `values`.
pub fn quartiles(values: &[f64]) -> Option<AgeQuartiles> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Some(AgeQuartiles {
        q1: quantile(&sorted, 0.25)?,
        q2: quantile(&sorted, 0.50)?,
        q3: quantile(&sorted, 0.75)?,
    })
}

/// Sample standard deviation (n - 1 denominator). `None` below two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt())
}
