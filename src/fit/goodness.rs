//! Kolmogorov–Smirnov goodness of fit.
//!
//! The significance value is `1 - F_K(t)` with
//! `t = (sqrt(n) + 0.11/sqrt(n) + 0.12) * D`, the usual finite-sample
//! adjustment of the asymptotic Kolmogorov distribution.
//!
//! Higher means "more consistent with the fitted family". Because the model
//! parameters were estimated from the same sample, the value is only meaningful
//! for ordering families against each other, not as a calibrated test.

use crate::domain::Sample;
use crate::math::kolmogorov_sf;
use crate::models::FittedModel;

/// Two-sided KS statistic `D = sup |ECDF(x) - F(x)|`.
///
/// The supremum is attained at a sample point, on one side or the other of an
/// ECDF jump. Above the jump `(i+1)/n` is compared with `F(x)`; below it `i/n`
/// is compared with the left limit `F(x-)`, which matters when the model itself
/// jumps at `x`.
pub fn ks_statistic(sample: &Sample, model: &FittedModel) -> f64 {
    let n = sample.len() as f64;
    sample
        .sorted()
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let above = (i as f64 + 1.0) / n - model.cdf(x);
            let below = model.cdf_left(x) - i as f64 / n;
            above.max(below)
        })
        .fold(0.0, f64::max)
}

/// Asymptotic significance for a KS statistic `d` over `n` observations.
pub fn ks_significance(d: f64, n: usize) -> f64 {
    let sqrt_n = (n as f64).sqrt();
    let t = (sqrt_n + 0.11 / sqrt_n + 0.12) * d;
    kolmogorov_sf(t)
}

/// KS significance of `model` against `sample`, in `[0, 1]`.
pub fn ks_test(sample: &Sample, model: &FittedModel) -> f64 {
    ks_significance(ks_statistic(sample, model), sample.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Family;
    use crate::fit::estimate;
    use approx::assert_abs_diff_eq;

    fn one_to_five() -> Sample {
        Sample::new(vec![5.0, 3.0, 1.0, 4.0, 2.0]).unwrap()
    }

    #[test]
    fn statistic_for_uniform_fit() {
        let m = FittedModel::Uniform { lower: 1.0, upper: 5.0 };
        assert_abs_diff_eq!(ks_statistic(&one_to_five(), &m), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn significance_values_for_one_to_five() {
        let s = one_to_five();
        let normal = FittedModel::Normal { mean: 3.0, std: 2.0_f64.sqrt() };
        let expon = FittedModel::Exponential { scale: 3.0 };
        let uniform = FittedModel::Uniform { lower: 1.0, upper: 5.0 };

        assert_abs_diff_eq!(ks_statistic(&s, &normal), 0.160_249_938_906_523, epsilon = 1e-9);
        assert_abs_diff_eq!(ks_statistic(&s, &expon), 0.286_582_880_967_408, epsilon = 1e-9);

        assert_abs_diff_eq!(ks_test(&s, &normal), 0.998_390_351_338, epsilon = 1e-7);
        assert_abs_diff_eq!(ks_test(&s, &expon), 0.728_955_098_667, epsilon = 1e-7);
        assert_abs_diff_eq!(ks_test(&s, &uniform), 0.974_789_246_541, epsilon = 1e-7);
    }

    #[test]
    fn perfect_fit_has_significance_one() {
        assert_eq!(ks_significance(0.0, 10), 1.0);
    }

    #[test]
    fn large_distance_is_implausible() {
        let s = Sample::new((0..200).map(|i| 1000.0 + i as f64).collect()).unwrap();
        let m = FittedModel::Normal { mean: 0.0, std: 1.0 };
        assert_abs_diff_eq!(ks_statistic(&s, &m), 1.0, epsilon = 1e-12);
        assert!(ks_test(&s, &m) < 1e-10);
    }

    #[test]
    fn constant_sample_fits_point_mass_exactly() {
        let s = Sample::new(vec![2.0; 10]).unwrap();
        for family in [Family::Normal, Family::Uniform] {
            let est = estimate(&s, family).unwrap();
            assert_eq!(ks_statistic(&s, &est.model), 0.0, "{family:?}");
            assert_eq!(ks_test(&s, &est.model), 1.0, "{family:?}");
        }
    }

    #[test]
    fn significance_in_unit_interval() {
        for i in 0..=100 {
            let p = ks_significance(i as f64 / 100.0, 25);
            assert!((0.0..=1.0).contains(&p), "p={p} out of range");
        }
    }
}
