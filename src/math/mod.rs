//! Mathematical utilities: descriptive statistics and the Kolmogorov distribution.

pub mod descriptive;
pub mod kolmogorov;

pub use descriptive::*;
pub use kolmogorov::*;
