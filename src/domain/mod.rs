//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - candidate families and the validated `Sample`
//! - ranked table rows (`RankEntry`) and per-sample `Report`s
//! - run configuration derived from the CLI

pub mod types;

pub use types::*;
