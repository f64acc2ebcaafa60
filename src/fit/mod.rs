//! Per-family fitting and evaluation.
//!
//! Responsibilities:
//!
//! - estimate each family's parameters by maximum likelihood
//! - measure goodness of fit (Kolmogorov–Smirnov significance)
//! - score each fit for model comparison (AICc)

pub mod estimator;
pub mod goodness;
pub mod score;

pub use estimator::*;
pub use goodness::*;
pub use score::*;
