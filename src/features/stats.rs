//! Rolling and aggregate statistics over a performance-ratio series.
//!
//! The rolling helpers compute the full causal series (window shrinks near the
//! start), even though only the final position feeds the predictor: every
//! position is produced by the same rule, so intermediate values can be checked
//! directly in tests.

/// Causal moving average with trailing window `window`, evaluated at every
/// position. Window size at position `i` is `min(i + 1, window)`.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let w = window.max(1);
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let start = (i + 1).saturating_sub(w);
            mean(&values[start..=i])
        })
        .collect()
}

/// Best-fit line slope of the trailing window at every position, via ordinary
/// least squares against the in-window index. Positions with fewer than 2
/// points in the window yield 0.
pub fn rolling_slope(values: &[f64], window: usize) -> Vec<f64> {
    let w = window.max(1);
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let start = (i + 1).saturating_sub(w);
            slope(&values[start..=i])
        })
        .collect()
}

/// OLS slope of `values` against indices `0..n`. Degenerate fits (n < 2 or
/// zero index variance) yield 0.
pub fn slope(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = mean(values);
    let mut num = 0.0;
    let mut den = 0.0;
    for (i, y) in values.iter().enumerate() {
        let dx = i as f64 - x_mean;
        num += dx * (y - y_mean);
        den += dx * dx;
    }
    if den == 0.0 {
        return 0.0;
    }
    num / den
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample (n-1 denominator) standard deviation; 0 when n < 2.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (n - 1) as f64;
    var.sqrt()
}
