//! Closed-form maximum-likelihood estimators.
//!
//! - Normal: sample mean and population standard deviation
//! - Exponential (location 0): scale = sample mean, only on non-negative data
//! - Uniform: support = [min, max]

use crate::domain::{Family, Sample, Undefined};
use crate::models::FittedModel;

/// A fitted model plus its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub model: FittedModel,
    pub label: String,
}

impl Estimate {
    fn new(model: FittedModel) -> Self {
        let label = model.label();
        Self { model, label }
    }
}

/// Estimate `family`'s parameters from `sample`.
///
/// Returns `Err(Undefined)` when the family cannot describe the sample (for
/// example an exponential fit on data with negative values).
pub fn estimate(sample: &Sample, family: Family) -> Result<Estimate, Undefined> {
    let model = match family {
        Family::Normal => FittedModel::Normal {
            mean: sample.mean(),
            std: sample.population_std(),
        },
        Family::Exponential => {
            let undefined = || Undefined {
                family,
                min: sample.min(),
                max: sample.max(),
            };
            if sample.min() < 0.0 {
                return Err(undefined());
            }
            let scale = sample.mean();
            // An all-zero sample has no valid rate.
            if !(scale.is_finite() && scale > 0.0) {
                return Err(undefined());
            }
            FittedModel::Exponential { scale }
        }
        Family::Uniform => FittedModel::Uniform {
            lower: sample.min(),
            upper: sample.max(),
        },
    };
    Ok(Estimate::new(model))
}
