//! Formatted terminal output for ranked reports.
//!
//! Formatting lives in one place so the fitting code stays free of
//! presentation details and output changes stay localized.

use chrono::Utc;

use crate::domain::{AnalysisConfig, RankEntry, ReportFile, SampleReport};
use crate::error::AppError;

pub const KS_HEADER: &str = "KOLMOGOROV-SMIRNOV TEST";
pub const AIC_HEADER: &str = "AKAIKE INFORMATION CRITERION";

const RULE_WIDTH: usize = 40;
const VALUE_WIDTH: usize = 8;

/// Fixed explanation printed before the first text report.
pub fn format_preamble(config: &AnalysisConfig) -> String {
    let families: Vec<&str> = config.families.iter().map(|f| f.display_name()).collect();
    let mut out = String::new();
    out.push_str("=== distfit - distribution fit ranking ===\n");
    out.push_str(&format!("Families: {}\n", families.join(", ")));
    out.push_str(&format!(
        "{KS_HEADER}: higher is better. Fitted families above the dashed\n"
    ));
    out.push_str(&format!(
        "  rule have significance >= {:.2}. Parameters are estimated from the same\n",
        config.threshold
    ));
    out.push_str("  sample, so compare rows with each other rather than reading them as\n");
    out.push_str("  calibrated p-values.\n");
    out.push_str(&format!(
        "{AIC_HEADER}: small-sample corrected AIC, lower is better.\n"
    ));
    out
}

/// Format one sample's two ranked tables.
pub fn format_report(report: &SampleReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} (n={}) ===\n", report.source, report.n));

    out.push_str(KS_HEADER);
    out.push('\n');
    for entry in &report.report.significance {
        out.push_str(&format_row(entry, fmt_significance));
    }
    out.push('\n');

    out.push_str(AIC_HEADER);
    out.push('\n');
    for entry in &report.report.score {
        out.push_str(&format_row(entry, fmt_score));
    }

    out
}

/// Serialize reports as a pretty JSON document.
pub fn format_json(reports: &[SampleReport]) -> Result<String, AppError> {
    serde_json::to_string_pretty(&report_file(reports))
        .map_err(|e| AppError::new(4, format!("Failed to serialize report JSON: {e}")))
}

pub fn report_file(reports: &[SampleReport]) -> ReportFile {
    ReportFile {
        tool: "distfit".to_string(),
        generated_at: Utc::now(),
        reports: reports.to_vec(),
    }
}

fn format_row(entry: &RankEntry, fmt_value: fn(f64) -> String) -> String {
    let row = match entry {
        RankEntry::Fitted { value, label, .. } => format!("{:>VALUE_WIDTH$}  {label}", fmt_value(*value)),
        RankEntry::Threshold { value } => {
            format!("{:>VALUE_WIDTH$}  {}", fmt_value(*value), "-".repeat(RULE_WIDTH))
        }
        RankEntry::Undefined { label, .. } => format!("{:>VALUE_WIDTH$}  {label}", "n/a"),
    };
    format!("{}\n", row.trim_end())
}

fn fmt_significance(v: f64) -> String {
    format!("{v:.5}")
}

/// Scores are shown truncated toward zero.
fn fmt_score(v: f64) -> String {
    format!("{}", v.trunc() as i64)
}
