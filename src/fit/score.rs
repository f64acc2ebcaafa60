//! Small-sample corrected Akaike information criterion (AICc).
//!
//! ```text
//! AICc = 2k - 2 LL + (2k² + 2k) / (n - k - 1)
//! ```
//!
//! Lower is better. The correction is singular at `n = k + 1` and negative
//! below it, so any `n <= k + 1` is rejected.

use crate::domain::Sample;
use crate::error::StatsError;
use crate::models::FittedModel;

/// Total log-likelihood of `sample` under `model`.
pub fn log_likelihood(sample: &Sample, model: &FittedModel) -> f64 {
    sample.values().iter().map(|&x| model.ln_pdf(x)).sum()
}

/// AICc from its ingredients.
pub fn aicc(log_likelihood: f64, k: usize, n: usize) -> Result<f64, StatsError> {
    if n <= k + 1 {
        return Err(StatsError::DegenerateSample { n, k });
    }
    let kf = k as f64;
    let score = 2.0 * kf - 2.0 * log_likelihood + (2.0 * kf * kf + 2.0 * kf) / (n - k - 1) as f64;
    if !score.is_finite() {
        return Err(StatsError::NonFiniteScore);
    }
    Ok(score)
}

/// AICc of `model` fitted to `sample`.
pub fn aicc_score(sample: &Sample, model: &FittedModel) -> Result<f64, StatsError> {
    aicc(log_likelihood(sample, model), model.param_count(), sample.len())
}
