//! Limiting distribution of the two-sided Kolmogorov–Smirnov statistic.
//!
//! For `t > 0` the CDF is
//!
//! ```text
//! F_K(t) = 1 - 2 Σ_{j≥1} (-1)^(j-1) exp(-2 j² t²)
//!        = sqrt(2π)/t Σ_{j≥1} exp(-(2j-1)² π² / (8 t²))
//! ```
//!
//! Numerical notes:
//! - The alternating form converges fast for large `t` but needs many terms
//!   (and loses precision) as `t → 0`.
//! - The theta-function form converges fast for small `t`.
//! - Switching at `t = 1.18`, four terms of either series reach double precision.

use std::f64::consts::PI;

/// Crossover between the two series.
const SWITCH_T: f64 = 1.18;

/// `sqrt(2π)`.
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// CDF of the asymptotic Kolmogorov distribution.
pub fn kolmogorov_cdf(t: f64) -> f64 {
    if t.is_nan() {
        return f64::NAN;
    }
    if t <= 0.0 {
        return 0.0;
    }
    if t < SWITCH_T {
        let y = (-(PI * PI) / (8.0 * t * t)).exp();
        let v = (SQRT_2PI / t) * (y + y.powi(9) + y.powi(25) + y.powi(49));
        return v.clamp(0.0, 1.0);
    }
    1.0 - kolmogorov_sf(t)
}

/// Survival function `1 - F_K(t)`.
///
/// Computed directly from the alternating series above the crossover so the
/// tail keeps full relative precision.
pub fn kolmogorov_sf(t: f64) -> f64 {
    if t.is_nan() {
        return f64::NAN;
    }
    if t <= 0.0 {
        return 1.0;
    }
    if t < SWITCH_T {
        return 1.0 - kolmogorov_cdf(t);
    }
    let x = (-2.0 * t * t).exp();
    let v = 2.0 * (x - x.powi(4) + x.powi(9));
    v.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Brute-force alternating series, accurate away from zero.
    fn reference_sf(t: f64) -> f64 {
        let mut sum = 0.0;
        for j in 1..200 {
            let sign = if j % 2 == 1 { 1.0 } else { -1.0 };
            let jf = j as f64;
            sum += sign * (-2.0 * jf * jf * t * t).exp();
        }
        2.0 * sum
    }

    #[test]
    fn matches_reference_series() {
        for &t in &[0.3, 0.5, 0.8, 1.0, 1.17, 1.18, 1.36, 2.0, 3.0] {
            assert_abs_diff_eq!(kolmogorov_sf(t), reference_sf(t), epsilon = 1e-12);
            assert_abs_diff_eq!(kolmogorov_cdf(t) + kolmogorov_sf(t), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn conventional_critical_value() {
        // 1.358 is the textbook 5% critical value.
        assert_abs_diff_eq!(kolmogorov_sf(1.36), 0.049_485_876_755, epsilon = 1e-9);
        assert_abs_diff_eq!(kolmogorov_sf(1.0), 0.269_999_671_677, epsilon = 1e-9);
    }

    #[test]
    fn boundary_values() {
        assert_eq!(kolmogorov_cdf(0.0), 0.0);
        assert_eq!(kolmogorov_sf(0.0), 1.0);
        assert_eq!(kolmogorov_cdf(-1.0), 0.0);
        assert!(kolmogorov_sf(10.0) < 1e-80);
        assert!(kolmogorov_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn cdf_is_monotone() {
        let mut prev = 0.0;
        for i in 1..400 {
            let t = i as f64 * 0.01;
            let v = kolmogorov_cdf(t);
            assert!(v >= prev, "F_K not monotone at t={t}");
            prev = v;
        }
    }
}
