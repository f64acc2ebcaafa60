//! `distfit` library crate.
//!
//! The binary (`distfit`) is a thin wrapper around this library so that:
//!
//! - the fitting, testing and ranking code is testable without spawning processes
//! - the pipeline can be reused with other front-ends

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
