//! Density and distribution functions for the candidate families.
//!
//! Every family exposes the same small capability set:
//! - `param_count` (free parameters, for information criteria)
//! - `ln_pdf` (log-likelihood contributions)
//! - `cdf` and its left limit `cdf_left` (goodness-of-fit against the
//!   empirical distribution)
//!
//! Zero-width fits (a constant sample) are treated as point masses: the CDF is
//! a unit step and the log-density is `+∞` on the point, `-∞` elsewhere.

use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::erfc;

use crate::domain::Family;

/// A family together with its fitted parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FittedModel {
    Normal { mean: f64, std: f64 },
    /// Location is fixed at 0.
    Exponential { scale: f64 },
    Uniform { lower: f64, upper: f64 },
}

impl FittedModel {
    pub fn family(&self) -> Family {
        match self {
            FittedModel::Normal { .. } => Family::Normal,
            FittedModel::Exponential { .. } => Family::Exponential,
            FittedModel::Uniform { .. } => Family::Uniform,
        }
    }

    pub fn param_count(&self) -> usize {
        self.family().param_count()
    }

    /// Natural log of the density at `x`.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        match *self {
            FittedModel::Normal { mean, std } => {
                if std <= 0.0 {
                    return point_mass_ln_pdf(x, mean);
                }
                let z = (x - mean) / std;
                -0.5 * z * z - std.ln() - 0.5 * (2.0 * PI).ln()
            }
            FittedModel::Exponential { scale } => {
                if x < 0.0 {
                    return f64::NEG_INFINITY;
                }
                -scale.ln() - x / scale
            }
            FittedModel::Uniform { lower, upper } => {
                if upper <= lower {
                    return point_mass_ln_pdf(x, lower);
                }
                if x < lower || x > upper {
                    return f64::NEG_INFINITY;
                }
                -(upper - lower).ln()
            }
        }
    }

    /// Cumulative distribution at `x`.
    pub fn cdf(&self, x: f64) -> f64 {
        match *self {
            FittedModel::Normal { mean, std } => {
                if std <= 0.0 {
                    return step(x, mean);
                }
                0.5 * erfc(-(x - mean) / (std * SQRT_2))
            }
            FittedModel::Exponential { scale } => {
                if x <= 0.0 {
                    return 0.0;
                }
                -(-x / scale).exp_m1()
            }
            FittedModel::Uniform { lower, upper } => {
                if upper <= lower {
                    return step(x, lower);
                }
                ((x - lower) / (upper - lower)).clamp(0.0, 1.0)
            }
        }
    }

    /// Left limit `P(X < x)`. Differs from `cdf` only at a point-mass atom.
    pub fn cdf_left(&self, x: f64) -> f64 {
        match *self {
            FittedModel::Normal { mean, std } if std <= 0.0 => step_left(x, mean),
            FittedModel::Uniform { lower, upper } if upper <= lower => step_left(x, lower),
            _ => self.cdf(x),
        }
    }

    /// Parameter summary shown in the ranked tables (2 decimal places).
    pub fn label(&self) -> String {
        match *self {
            FittedModel::Normal { mean, std } => format!("Normal(mean={mean:.2}, std={std:.2})"),
            FittedModel::Exponential { scale } => {
                format!("Exponential(scale={scale:.2}, rate={:.2})", 1.0 / scale)
            }
            FittedModel::Uniform { lower, upper } => format!("Uniform({lower:.2}, {upper:.2})"),
        }
    }
}

fn step(x: f64, at: f64) -> f64 {
    if x < at { 0.0 } else { 1.0 }
}

fn step_left(x: f64, at: f64) -> f64 {
    if x <= at { 0.0 } else { 1.0 }
}

fn point_mass_ln_pdf(x: f64, at: f64) -> f64 {
    if x == at { f64::INFINITY } else { f64::NEG_INFINITY }
}
