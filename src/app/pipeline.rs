//! Shared analysis pipeline: ingest -> fit/test/score -> rank.
//!
//! Keeping this separate from `app` lets the front-end focus on presentation
//! (text vs JSON) and keeps the workflow testable without a process.

use rayon::prelude::*;
use tracing::info;

use crate::domain::{AnalysisConfig, SampleReport};
use crate::error::AppError;
use crate::io::{InputSource, load_sample};
use crate::report::analyze_sample;

/// Load one source and rank every configured family against it.
pub fn analyze_source(source: &InputSource, config: &AnalysisConfig) -> Result<SampleReport, AppError> {
    let sample = load_sample(source)?;
    info!(source = %source, n = sample.len(), "sample loaded");

    let report = analyze_sample(&sample, &config.families, config.threshold);
    Ok(SampleReport {
        source: source.to_string(),
        n: sample.len(),
        report,
    })
}

/// Analyze every configured input.
///
/// Inputs are independent, so they run in parallel; results come back in input
/// order. A failing input does not stop the others.
pub fn run_analysis(config: &AnalysisConfig) -> Vec<(InputSource, Result<SampleReport, AppError>)> {
    InputSource::from_paths(&config.inputs)
        .into_par_iter()
        .map(|source| {
            let outcome = analyze_source(&source, config);
            (source, outcome)
        })
        .collect()
}
