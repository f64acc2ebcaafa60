//! Parameterized distribution models.
//!
//! Each family is a variant of one closed enum so estimation, testing and
//! scoring code can stay generic over `FittedModel`.

pub mod model;

pub use model::*;
