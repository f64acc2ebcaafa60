//! Input/output helpers.
//!
//! - newline-delimited sample ingest (`ingest`)
//! - JSON report export (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
