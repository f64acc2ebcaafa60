//! Ranking: run every candidate family over a sample and order the results.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::domain::{Family, RankEntry, Report, Sample};
use crate::fit::{aicc_score, estimate, ks_test};

pub mod format;

pub use format::*;

/// Fit, test and score each family, then rank both tables.
///
/// The significance table always carries one `Threshold` row at `threshold`.
/// Families whose estimator is undefined appear last in the significance table
/// and not at all in the score table. Fitted families whose score cannot be
/// computed appear last in the score table as `Undefined`.
pub fn analyze_sample(sample: &Sample, families: &[Family], threshold: f64) -> Report {
    let mut significance = vec![RankEntry::Threshold { value: threshold }];
    let mut score = Vec::with_capacity(families.len());

    for &family in families {
        let est = match estimate(sample, family) {
            Ok(est) => est,
            Err(undefined) => {
                warn!(
                    family = family.display_name(),
                    min = undefined.min,
                    max = undefined.max,
                    "estimator undefined for sample"
                );
                significance.push(RankEntry::Undefined {
                    family,
                    label: undefined.label(),
                });
                continue;
            }
        };

        let p = ks_test(sample, &est.model);
        debug!(family = family.display_name(), significance = p, "ks test");
        significance.push(RankEntry::Fitted {
            family,
            value: p,
            label: est.label.clone(),
        });

        match aicc_score(sample, &est.model) {
            Ok(value) => {
                debug!(family = family.display_name(), aicc = value, "score");
                score.push(RankEntry::Fitted {
                    family,
                    value,
                    label: est.label,
                });
            }
            Err(err) => {
                warn!(family = family.display_name(), %err, "score undefined");
                score.push(RankEntry::Undefined {
                    family,
                    label: format!("{}: {err}", est.label),
                });
            }
        }
    }

    sort_significance(&mut significance);
    sort_score(&mut score);
    Report { significance, score }
}

/// Descending by value; the marker goes below a real value equal to it;
/// undefined rows last.
pub fn sort_significance(entries: &mut [RankEntry]) {
    entries.sort_by(|a, b| match (a.value(), b.value()) {
        (Some(x), Some(y)) => y
            .total_cmp(&x)
            .then_with(|| is_marker(a).cmp(&is_marker(b))),
        (a, b) => undefined_last(a, b),
    });
}

/// Ascending by value; undefined rows last.
pub fn sort_score(entries: &mut [RankEntry]) {
    entries.sort_by(|a, b| match (a.value(), b.value()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (a, b) => undefined_last(a, b),
    });
}

fn is_marker(entry: &RankEntry) -> bool {
    matches!(entry, RankEntry::Threshold { .. })
}

fn undefined_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_THRESHOLD;

    fn fitted(family: Family, value: f64) -> RankEntry {
        RankEntry::Fitted {
            family,
            value,
            label: family.display_name().to_string(),
        }
    }

    fn values(entries: &[RankEntry]) -> Vec<Option<f64>> {
        entries.iter().map(RankEntry::value).collect()
    }

    #[test]
    fn significance_sorts_descending_with_undefined_last() {
        let mut entries = vec![
            RankEntry::Undefined {
                family: Family::Exponential,
                label: "x".to_string(),
            },
            fitted(Family::Normal, 0.01),
            RankEntry::Threshold { value: 0.05 },
            fitted(Family::Uniform, 0.4),
        ];
        sort_significance(&mut entries);
        assert_eq!(values(&entries), vec![Some(0.4), Some(0.05), Some(0.01), None]);
    }

    #[test]
    fn real_value_at_threshold_sorts_above_marker() {
        let mut entries = vec![RankEntry::Threshold { value: 0.05 }, fitted(Family::Normal, 0.05)];
        sort_significance(&mut entries);
        assert!(matches!(entries[0], RankEntry::Fitted { .. }));
        assert!(matches!(entries[1], RankEntry::Threshold { .. }));
    }

    #[test]
    fn score_sorts_ascending_with_undefined_last() {
        let mut entries = vec![
            fitted(Family::Normal, 30.0),
            RankEntry::Undefined {
                family: Family::Uniform,
                label: "x".to_string(),
            },
            fitted(Family::Exponential, -4.0),
        ];
        sort_score(&mut entries);
        assert_eq!(values(&entries), vec![Some(-4.0), Some(30.0), None]);
    }

    #[test]
    fn one_to_five_end_to_end() {
        let sample = Sample::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let report = analyze_sample(&sample, &Family::ALL, DEFAULT_THRESHOLD);

        let sig: Vec<Option<Family>> = report.significance.iter().map(RankEntry::family).collect();
        assert_eq!(
            sig,
            vec![Some(Family::Normal), Some(Family::Uniform), Some(Family::Exponential), None]
        );
        assert!(matches!(report.significance[3], RankEntry::Threshold { value } if value == 0.05));

        let score: Vec<Option<Family>> = report.score.iter().map(RankEntry::family).collect();
        assert_eq!(
            score,
            vec![Some(Family::Uniform), Some(Family::Exponential), Some(Family::Normal)]
        );

        let RankEntry::Fitted { label, .. } = &report.significance[0] else {
            panic!("expected a fitted row");
        };
        assert_eq!(label, "Normal(mean=3.00, std=1.41)");
    }

    #[test]
    fn undefined_estimator_only_in_significance_table() {
        let sample = Sample::new(vec![-2.0, 0.5, 1.0, 3.0, 4.5, 6.0]).unwrap();
        let report = analyze_sample(&sample, &Family::ALL, DEFAULT_THRESHOLD);

        assert_eq!(report.significance.len(), 4);
        let last = report.significance.last().unwrap();
        assert_eq!(
            last,
            &RankEntry::Undefined {
                family: Family::Exponential,
                label: "Exponential: undefined for data in [-2.00, 6.00]".to_string(),
            }
        );

        assert_eq!(report.score.len(), 2);
        assert!(report.score.iter().all(|e| e.family() != Some(Family::Exponential)));
    }

    #[test]
    fn tiny_sample_reports_undefined_scores() {
        let sample = Sample::new(vec![1.0, 2.0, 4.0]).unwrap();
        let report = analyze_sample(&sample, &Family::ALL, DEFAULT_THRESHOLD);

        // Exponential (k=1) can be scored at n=3; the two-parameter families cannot.
        assert_eq!(report.score.len(), 3);
        assert!(matches!(
            report.score[0],
            RankEntry::Fitted { family: Family::Exponential, .. }
        ));
        assert!(report.score[1..]
            .iter()
            .all(|e| matches!(e, RankEntry::Undefined { .. })));
    }

    #[test]
    fn constant_sample_point_masses_rank_above_marker() {
        let sample = Sample::new(vec![2.0; 10]).unwrap();
        let report = analyze_sample(&sample, &[Family::Normal, Family::Uniform], DEFAULT_THRESHOLD);

        assert_eq!(values(&report.significance), vec![Some(1.0), Some(1.0), Some(0.05)]);
        assert!(report.score.iter().all(|e| matches!(e, RankEntry::Undefined { .. })));
    }

    #[test]
    fn analysis_is_idempotent() {
        let sample = Sample::new(vec![0.3, 1.7, 2.2, 0.9, 5.1, 3.3, 0.1]).unwrap();
        let first = analyze_sample(&sample, &Family::ALL, DEFAULT_THRESHOLD);
        let second = analyze_sample(&sample, &Family::ALL, DEFAULT_THRESHOLD);
        assert_eq!(first, second);
    }

    #[test]
    fn respects_family_subset() {
        let sample = Sample::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let report = analyze_sample(&sample, &[Family::Uniform], DEFAULT_THRESHOLD);
        assert_eq!(report.significance.len(), 2);
        assert_eq!(report.score.len(), 1);
    }
}
