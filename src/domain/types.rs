//! Shared domain types.
//!
//! These types are kept small and serializable so a report can be printed as a
//! table, exported to JSON, or compared across runs.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::math::{mean, population_std};

/// Conventional significance cutoff drawn as a dashed rule in the KS table.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Candidate distribution family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Normal,
    Exponential,
    Uniform,
}

impl Family {
    /// Default candidate order.
    pub const ALL: [Family; 3] = [Family::Normal, Family::Exponential, Family::Uniform];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Family::Normal => "Normal",
            Family::Exponential => "Exponential",
            Family::Uniform => "Uniform",
        }
    }

    /// Number of free parameters estimated from the data.
    ///
    /// The exponential location is pinned at 0, so only its scale counts.
    pub fn param_count(self) -> usize {
        match self {
            Family::Normal => 2,
            Family::Exponential => 1,
            Family::Uniform => 2,
        }
    }
}

/// A validated, non-empty sample of finite observations.
///
/// A sorted copy is kept alongside the original order because the KS statistic
/// walks the empirical distribution function.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
    sorted: Vec<f64>,
}

impl Sample {
    pub fn new(values: Vec<f64>) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptySample);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(StatsError::NonFiniteValue { index, value });
        }

        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        Ok(Self { values, sorted })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true for a constructed sample.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Observations in ascending order.
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    pub fn mean(&self) -> f64 {
        mean(&self.values)
    }

    /// Biased (divide by `n`) standard deviation.
    pub fn population_std(&self) -> f64 {
        population_std(&self.values)
    }
}

/// Why a family's estimator produced no model for a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Undefined {
    pub family: Family,
    pub min: f64,
    pub max: f64,
}

impl Undefined {
    /// Diagnostic label shown in place of a parameter summary.
    pub fn label(&self) -> String {
        format!(
            "{}: undefined for data in [{:.2}, {:.2}]",
            self.family.display_name(),
            self.min,
            self.max
        )
    }
}

/// One row of a ranked table.
///
/// The threshold marker and undefined fits are their own variants so they
/// never collide with a computed metric that happens to share their value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RankEntry {
    Fitted { family: Family, value: f64, label: String },
    Threshold { value: f64 },
    Undefined { family: Family, label: String },
}

impl RankEntry {
    /// Metric value used for ordering (`None` for undefined rows).
    pub fn value(&self) -> Option<f64> {
        match self {
            RankEntry::Fitted { value, .. } | RankEntry::Threshold { value } => Some(*value),
            RankEntry::Undefined { .. } => None,
        }
    }

    pub fn family(&self) -> Option<Family> {
        match self {
            RankEntry::Fitted { family, .. } | RankEntry::Undefined { family, .. } => Some(*family),
            RankEntry::Threshold { .. } => None,
        }
    }
}

/// The two ranked tables for one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// KS significance, most plausible family first.
    pub significance: Vec<RankEntry>,
    /// Corrected AIC, preferred model first.
    pub score: Vec<RankEntry>,
}

/// A report tagged with where its sample came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleReport {
    pub source: String,
    pub n: usize,
    #[serde(flatten)]
    pub report: Report,
}

/// A saved report file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub reports: Vec<SampleReport>,
}

/// Output rendering for `distfit analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Input files; empty means standard input.
    pub inputs: Vec<PathBuf>,
    /// Candidate families in evaluation order.
    pub families: Vec<Family>,
    /// Value at which the dashed marker row is placed.
    pub threshold: f64,
    pub format: OutputFormat,
    pub export: Option<PathBuf>,
    pub preamble: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            families: Family::ALL.to_vec(),
            threshold: DEFAULT_THRESHOLD,
            format: OutputFormat::Text,
            export: None,
            preamble: true,
        }
    }
}

/// Settings for writing synthetic sample files.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub out_dir: PathBuf,
    pub size: usize,
    pub seed: Option<u64>,
    pub normal_mean: f64,
    pub normal_std: f64,
    pub uniform_low: f64,
    pub uniform_width: f64,
    pub exponential_scale: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_rejects_empty_and_non_finite() {
        assert_eq!(Sample::new(vec![]).unwrap_err(), StatsError::EmptySample);
        let err = Sample::new(vec![1.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(err, StatsError::NonFiniteValue { index: 1, .. }));
    }

    #[test]
    fn sample_keeps_order_and_sorted_copy() {
        let s = Sample::new(vec![3.0, -1.0, 2.0]).unwrap();
        assert_eq!(s.values(), &[3.0, -1.0, 2.0]);
        assert_eq!(s.sorted(), &[-1.0, 2.0, 3.0]);
        assert_eq!(s.min(), -1.0);
        assert_eq!(s.max(), 3.0);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn undefined_label_formats_range() {
        let u = Undefined {
            family: Family::Exponential,
            min: -1.234,
            max: 5.0,
        };
        assert_eq!(u.label(), "Exponential: undefined for data in [-1.23, 5.00]");
    }

    #[test]
    fn rank_entry_serializes_with_kind_tag() {
        let entry = RankEntry::Threshold { value: 0.05 };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"kind":"threshold","value":0.05}"#);
    }
}
