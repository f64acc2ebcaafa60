//! Descriptive statistics over raw slices.

/// Arithmetic mean. Returns `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population (biased, divide-by-`n`) standard deviation.
///
/// This is the Gaussian maximum-likelihood estimate, not the unbiased sample
/// estimator.
pub fn population_std(values: &[f64]) -> f64 {
    let m = mean(values);
    let ss: f64 = values.iter().map(|&x| (x - m) * (x - m)).sum();
    (ss / values.len() as f64).sqrt()
}
