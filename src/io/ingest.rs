//! Sample ingest.
//!
//! Input is one number per line, from a file or standard input. Blank lines are
//! ignored; anything else that does not parse to a finite number rejects the
//! whole sample (there is no partial report for a half-read file).

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::domain::Sample;
use crate::error::AppError;

/// Where a sample is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Sources for a list of paths (standard input when empty).
    pub fn from_paths(paths: &[PathBuf]) -> Vec<InputSource> {
        if paths.is_empty() {
            return vec![InputSource::Stdin];
        }
        paths.iter().cloned().map(InputSource::File).collect()
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load and validate a sample from `source`.
pub fn load_sample(source: &InputSource) -> Result<Sample, AppError> {
    let sample = match source {
        InputSource::Stdin => read_sample(std::io::stdin().lock()),
        InputSource::File(path) => File::open(path)
            .map_err(|e| AppError::new(2, format!("Failed to open input: {e}")))
            .and_then(|file| read_sample(BufReader::new(file))),
    };
    sample.map_err(|e| e.context(source))
}

/// Parse newline-delimited numbers into a `Sample`.
pub fn read_sample<R: BufRead>(reader: R) -> Result<Sample, AppError> {
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| AppError::new(2, format!("Read error at line {line_no}: {e}")))?;
        let text = line.trim().trim_start_matches('\u{feff}');
        if text.is_empty() {
            continue;
        }
        values.push(parse_value(text).map_err(|msg| AppError::new(2, format!("Line {line_no}: {msg}")))?);
    }
    Ok(Sample::new(values)?)
}

fn parse_value(s: &str) -> Result<f64, String> {
    let v = s
        .parse::<f64>()
        .map_err(|_| format!("invalid number '{s}'"))?;
    if !v.is_finite() {
        return Err(format!("non-finite value '{s}'"));
    }
    Ok(v)
}
