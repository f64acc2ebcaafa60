//! Write reports to a JSON file.

use std::fs::File;
use std::path::Path;

use crate::domain::SampleReport;
use crate::error::AppError;
use crate::report::report_file;

/// Write all sample reports to `path` as pretty JSON.
pub fn write_report_json(path: &Path, reports: &[SampleReport]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create report JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &report_file(reports))
        .map_err(|e| AppError::new(2, format!("Failed to write report JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DEFAULT_THRESHOLD, Family, ReportFile, Sample};
    use crate::report::analyze_sample;

    #[test]
    fn writes_readable_json() {
        let sample = Sample::new(vec![0.5, 1.0, 2.5, 4.0, 7.5]).unwrap();
        let reports = vec![SampleReport {
            source: "a.txt".to_string(),
            n: sample.len(),
            report: analyze_sample(&sample, &Family::ALL, DEFAULT_THRESHOLD),
        }];

        let dir = std::env::temp_dir().join(format!("distfit-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.json");
        write_report_json(&path, &reports).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: ReportFile = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.reports.len(), 1);
        assert_eq!(parsed.reports[0].source, "a.txt");
        assert_eq!(parsed.reports[0].report.score.len(), 3);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
